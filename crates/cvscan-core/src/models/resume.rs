//! Résumé data models and the report handed back to callers.

use serde::{Deserialize, Serialize};

/// Returned by contact extractors when nothing matches.
pub const NOT_FOUND: &str = "Not Found";

/// Returned by the name extractor when the text has no non-empty line.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Name reported for documents without a usable text layer.
pub const UNREADABLE_DOCUMENT: &str = "Unreadable Document";

/// Message attached to unreadable reports.
pub const UNREADABLE_MESSAGE: &str =
    "Could not extract text. The document may be scanned or image-based.";

/// A link to a profile on a known coding platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingProfile {
    /// Platform display name.
    pub platform: String,

    /// Normalized `https://www.` URL.
    pub url: String,

    /// The line the link was found on, trimmed.
    pub details: String,
}

/// Fields extracted from résumé text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub coding_profiles: Vec<CodingProfile>,
    pub projects: String,
    pub publications: String,
}

impl Default for ResumeProfile {
    fn default() -> Self {
        Self {
            name: UNKNOWN_CANDIDATE.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            education: Vec::new(),
            skills: Vec::new(),
            coding_profiles: Vec::new(),
            projects: String::new(),
            publications: String::new(),
        }
    }
}

/// Outcome of scoring found skills against required skills.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Percentage of required skills found, rounded to 2 decimals.
    pub score: f64,

    /// Required skills not found, in caller order and casing.
    pub missing_skills: Vec<String>,
}

/// Whether the document yielded usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ok,
    /// Empty or scanned document; field extraction was skipped.
    Unreadable,
}

/// Combined profile and score, serialized as the caller's JSON response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub status: ReportStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub education_level: Vec<String>,
    pub resume_skills: Vec<String>,
    pub coding_profiles: Vec<CodingProfile>,
    pub projects: String,
    pub publications: String,
    pub resume_score: f64,
    pub missing_skills: Vec<String>,

    /// Length in characters of the extracted text.
    pub text_length: usize,
}

impl ResumeReport {
    /// Build a report from an extracted profile and its score.
    pub fn new(profile: ResumeProfile, score: ScoreResult, text_length: usize) -> Self {
        Self {
            status: ReportStatus::Ok,
            message: None,
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            education_level: profile.education,
            resume_skills: profile.skills,
            coding_profiles: profile.coding_profiles,
            projects: profile.projects,
            publications: profile.publications,
            resume_score: score.score,
            missing_skills: score.missing_skills,
            text_length,
        }
    }

    /// Report for a document whose text could not be extracted.
    ///
    /// Every required skill is missing and the score is zero.
    pub fn unreadable(required_skills: &[String], text_length: usize) -> Self {
        Self {
            status: ReportStatus::Unreadable,
            message: Some(UNREADABLE_MESSAGE.to_string()),
            name: UNREADABLE_DOCUMENT.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            education_level: Vec::new(),
            resume_skills: Vec::new(),
            coding_profiles: Vec::new(),
            projects: String::new(),
            publications: String::new(),
            resume_score: 0.0,
            missing_skills: required_skills.to_vec(),
            text_length,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        self.status == ReportStatus::Unreadable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_report_json() {
        let report = ResumeReport::unreadable(&["Rust".to_string()], 3);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "unreadable");
        assert_eq!(json["missing_skills"][0], "Rust");
        assert_eq!(json["resume_score"], 0.0);
        assert!(json["message"].is_string());
    }

    #[test]
    fn test_ok_report_omits_message() {
        let report = ResumeReport::new(ResumeProfile::default(), ScoreResult::default(), 120);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json.get("message").is_none());
        assert_eq!(json["name"], UNKNOWN_CANDIDATE);
    }
}
