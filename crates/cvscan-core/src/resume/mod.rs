//! Résumé field extraction and end-to-end analysis.

mod analyzer;
mod parser;
pub mod rules;

pub use analyzer::ResumeAnalyzer;
pub use parser::ProfileExtractor;

use crate::models::resume::ResumeProfile;

/// Trait for résumé field extractors.
///
/// The heuristic [`ProfileExtractor`] is the only implementation today; a
/// layout-aware extractor can be swapped in behind the same contract without
/// touching scoring or callers.
pub trait ResumeExtractor: Send + Sync {
    /// Extract profile fields from raw text.
    ///
    /// `additional_skills` are matched alongside the built-in skill list.
    fn extract(&self, text: &str, additional_skills: &[String]) -> ResumeProfile;
}
