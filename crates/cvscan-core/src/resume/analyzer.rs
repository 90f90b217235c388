//! End-to-end résumé analysis: text extraction, field extraction, scoring.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use super::{ProfileExtractor, ResumeExtractor};
use crate::error::Result;
use crate::models::config::CvscanConfig;
use crate::models::resume::ResumeReport;
use crate::pdf::{TextExtractor, trimmed_len};
use crate::scoring::calculate_score;

/// Runs the extraction pipeline for one document at a time.
///
/// Holds only immutable configuration and compiled patterns, so a single
/// analyzer can serve concurrent callers.
pub struct ResumeAnalyzer {
    text_extractor: TextExtractor,
    profile_extractor: Box<dyn ResumeExtractor>,
    unreadable_text_length: usize,
    upload_dir: Option<PathBuf>,
}

impl ResumeAnalyzer {
    /// Create an analyzer from configuration.
    pub fn new(config: &CvscanConfig) -> Result<Self> {
        let profile_extractor = ProfileExtractor::from_lexicon(config.lexicon.clone())?;

        Ok(Self {
            text_extractor: TextExtractor::from_config(&config.pdf),
            profile_extractor: Box::new(profile_extractor),
            unreadable_text_length: config.pdf.unreadable_text_length,
            upload_dir: None,
        })
    }

    /// Replace the text extractor.
    pub fn with_text_extractor(mut self, extractor: TextExtractor) -> Self {
        self.text_extractor = extractor;
        self
    }

    /// Replace the field extractor.
    pub fn with_profile_extractor(mut self, extractor: Box<dyn ResumeExtractor>) -> Self {
        self.profile_extractor = extractor;
        self
    }

    /// Write uploads under `dir` instead of the system temp directory.
    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    /// Analyze already-extracted text.
    ///
    /// Text shorter than the unreadable threshold after trimming yields
    /// [`ResumeReport::unreadable`] without running field extraction.
    pub fn analyze_text(&self, text: &str, required_skills: &[String]) -> ResumeReport {
        let text_length = trimmed_len(text);

        if text_length < self.unreadable_text_length {
            warn!(
                "Extracted text too short ({} chars), treating document as unreadable",
                text_length
            );
            return ResumeReport::unreadable(required_skills, text_length);
        }

        let profile = self.profile_extractor.extract(text, required_skills);
        let score = calculate_score(&profile.skills, required_skills);

        info!(
            "Scored {:.2}% with {} missing skills",
            score.score,
            score.missing_skills.len()
        );

        ResumeReport::new(profile, score, text_length)
    }

    /// Extract text from a document on disk and analyze it.
    pub fn analyze_file(&self, path: &Path, required_skills: &[String]) -> Result<ResumeReport> {
        let start = Instant::now();
        info!("Analyzing {}", path.display());

        let text = self.text_extractor.extract_file(path)?;
        let report = self.analyze_text(&text, required_skills);

        debug!("Analysis of {} took {:?}", path.display(), start.elapsed());
        Ok(report)
    }

    /// Analyze an uploaded document held in memory.
    ///
    /// The bytes are written to a transient file named after `file_name`'s
    /// extension, which is removed when this returns, on success or failure.
    pub fn analyze_upload(
        &self,
        data: &[u8],
        file_name: &str,
        required_skills: &[String],
    ) -> Result<ResumeReport> {
        let suffix = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let mut builder = tempfile::Builder::new();
        builder.prefix("cvscan-upload-").suffix(&suffix);
        let mut upload = match &self.upload_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        upload.write_all(data)?;
        upload.flush()?;

        debug!("Wrote {} bytes to {}", data.len(), upload.path().display());

        // `upload` is deleted when dropped.
        self.analyze_file(upload.path(), required_skills)
    }
}
