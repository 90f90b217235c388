//! Coding platform profile links.

use regex::{Regex, RegexBuilder};

use crate::error::ExtractionError;
use crate::models::config::PlatformPattern;
use crate::models::resume::CodingProfile;

/// A compiled platform URL pattern.
#[derive(Debug, Clone)]
pub struct PlatformMatcher {
    platform: String,
    regex: Regex,
}

impl PlatformMatcher {
    /// Compile a platform pattern, matching case-insensitively.
    pub fn new(pattern: &PlatformPattern) -> Result<Self, ExtractionError> {
        let regex = RegexBuilder::new(&pattern.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExtractionError::InvalidPattern {
                name: pattern.platform.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            platform: pattern.platform.clone(),
            regex,
        })
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn compile_all(patterns: &[PlatformPattern]) -> Result<Vec<Self>, ExtractionError> {
        patterns.iter().map(Self::new).collect()
    }

    /// First line containing a profile link for this platform.
    pub fn find(&self, text: &str) -> Option<CodingProfile> {
        text.lines().find_map(|line| {
            self.regex.find(line).map(|m| CodingProfile {
                platform: self.platform.clone(),
                url: format!("https://www.{}", m.as_str()),
                details: line.trim().to_string(),
            })
        })
    }
}

/// At most one profile per platform, in platform order.
pub fn extract_coding_profiles(text: &str, matchers: &[PlatformMatcher]) -> Vec<CodingProfile> {
    matchers.iter().filter_map(|m| m.find(text)).collect()
}
