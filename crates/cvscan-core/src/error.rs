//! Error types for the cvscan-core library.

use thiserror::Error;

/// Main error type for the cvscan library.
#[derive(Error, Debug)]
pub enum CvscanError {
    /// Résumé field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a single text extraction backend.
///
/// These never escape [`crate::pdf::TextExtractor`]; they are logged and the
/// backend's output is treated as empty.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The backend panicked while reading the document.
    #[error("backend {0} panicked")]
    BackendPanicked(&'static str),
}

/// Errors related to résumé field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A configured pattern is not a valid regular expression.
    #[error("invalid pattern for {name}: {reason}")]
    InvalidPattern { name: String, reason: String },
}

/// Result type for the cvscan library.
pub type Result<T> = std::result::Result<T, CvscanError>;
