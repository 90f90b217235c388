//! Core library for résumé screening.
//!
//! This crate provides:
//! - PDF text extraction through an ordered chain of backends with fallback
//! - Heuristic résumé field extraction (contact details, education, skills,
//!   coding profiles, project and publication sections)
//! - Skill match scoring with missing-skill reporting

pub mod error;
pub mod models;
pub mod pdf;
pub mod resume;
pub mod scoring;

pub use error::{CvscanError, Result};
pub use models::config::{CvscanConfig, Lexicon, PdfConfig, PlatformPattern};
pub use models::resume::{CodingProfile, ReportStatus, ResumeProfile, ResumeReport, ScoreResult};
pub use pdf::{DocumentFormat, TextBackend, TextExtractor};
pub use resume::{ProfileExtractor, ResumeAnalyzer, ResumeExtractor};
pub use scoring::calculate_score;
