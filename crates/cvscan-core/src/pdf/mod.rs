//! Document text extraction.

mod extractor;

pub use extractor::{LopdfBackend, PdfExtractBackend, TextExtractor};
pub(crate) use extractor::trimmed_len;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detect the format from a path. Unknown or missing extensions are read as PDF.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Pdf)
    }
}

/// A single strategy for pulling the text layer out of a PDF.
///
/// Backends are tried in order by [`TextExtractor`]; each may fail on its own
/// without affecting the others.
pub trait TextBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract text from the raw PDF bytes.
    fn extract(&self, data: &[u8]) -> Result<String>;
}
