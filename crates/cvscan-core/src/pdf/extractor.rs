//! PDF text extraction using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{DocumentFormat, Result, TextBackend};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Page-by-page text layer extraction using lopdf.
pub struct LopdfBackend;

impl LopdfBackend {
    fn load(data: &[u8]) -> Result<Document> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        Ok(doc)
    }
}

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, data: &[u8]) -> Result<String> {
        let doc = Self::load(data)?;
        let pages = doc.get_pages();
        let mut text = String::new();

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    trace!("Page {}: {} chars", page_num, page_text.len());
                    if !page_text.is_empty() {
                        text.push_str(&page_text);
                        if !page_text.ends_with('\n') {
                            text.push('\n');
                        }
                    }
                }
                Err(e) => {
                    // Keep what the earlier pages produced.
                    warn!("lopdf failed on page {}: {}", page_num, e);
                    break;
                }
            }
        }

        debug!("lopdf extracted {} chars from {} pages", text.len(), pages.len());
        Ok(text)
    }
}

/// Whole-document extraction using pdf-extract.
pub struct PdfExtractBackend;

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, data: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed fonts instead of returning an error.
        catch_backend_panic(self.name(), || {
            pdf_extract::extract_text_from_mem(data)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))
        })
    }
}

/// Run a backend call, turning a panic into [`PdfError::BackendPanicked`].
fn catch_backend_panic<F>(name: &'static str, extract: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + std::panic::UnwindSafe,
{
    std::panic::catch_unwind(extract).map_err(|_| PdfError::BackendPanicked(name))?
}

/// Text extractor that runs an ordered chain of backends.
///
/// The first backend always runs. Each following backend is consulted only
/// while the best text so far is shorter than `min_text_length` after
/// trimming, and replaces it only when its own trimmed output is longer.
/// Backend failures are logged and count as empty output.
pub struct TextExtractor {
    backends: Vec<Box<dyn TextBackend>>,
    min_text_length: usize,
}

impl TextExtractor {
    /// Create an extractor with the default lopdf then pdf-extract chain.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create an extractor with the default chain and configured threshold.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::without_backends()
            .with_min_text_length(config.min_text_length)
            .with_backend(Box::new(LopdfBackend))
            .with_backend(Box::new(PdfExtractBackend))
    }

    /// Create an extractor with no backends.
    pub fn without_backends() -> Self {
        Self {
            backends: Vec::new(),
            min_text_length: PdfConfig::default().min_text_length,
        }
    }

    /// Append a backend to the chain.
    pub fn with_backend(mut self, backend: Box<dyn TextBackend>) -> Self {
        self.backends.push(backend);
        self
    }

    /// Set the fallback threshold.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Names of the configured backends, in order.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Read a document from disk and extract its text.
    ///
    /// Only a failure to read the file is an error; unparseable content
    /// yields empty text.
    pub fn extract_file(&self, path: &Path) -> crate::Result<String> {
        let data = std::fs::read(path)?;
        Ok(self.extract_bytes(&data, DocumentFormat::from_path(path)))
    }

    /// Extract text from an in-memory document.
    pub fn extract_bytes(&self, data: &[u8], format: DocumentFormat) -> String {
        match format {
            DocumentFormat::PlainText => String::from_utf8_lossy(data).into_owned(),
            DocumentFormat::Pdf => self.extract_pdf(data),
        }
    }

    /// Run the backend chain over PDF bytes.
    pub fn extract_pdf(&self, data: &[u8]) -> String {
        let mut best = String::new();
        let mut best_len = 0;

        for (i, backend) in self.backends.iter().enumerate() {
            if i > 0 && best_len >= self.min_text_length {
                break;
            }

            let text = match backend.extract(data) {
                Ok(text) => text,
                Err(e) => {
                    warn!("{} error: {}", backend.name(), e);
                    continue;
                }
            };

            let len = trimmed_len(&text);
            debug!("{} produced {} chars (trimmed)", backend.name(), len);

            if i == 0 || len > best_len {
                if i > 0 {
                    debug!("Falling back to {} output", backend.name());
                }
                best = text;
                best_len = len;
            }
        }

        best
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Length in characters of the text with surrounding whitespace removed.
pub(crate) fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
