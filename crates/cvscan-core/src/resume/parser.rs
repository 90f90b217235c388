//! Heuristic résumé parser combining the rule-based extractors.

use tracing::debug;

use super::ResumeExtractor;
use super::rules::{
    PlatformMatcher, extract_coding_profiles, extract_education, extract_email, extract_name,
    extract_phone, extract_projects, extract_publications, extract_skills,
};
use crate::error::ExtractionError;
use crate::models::config::Lexicon;
use crate::models::resume::ResumeProfile;

/// Regex and keyword based profile extractor.
pub struct ProfileExtractor {
    lexicon: Lexicon,
    platforms: Vec<PlatformMatcher>,
}

impl ProfileExtractor {
    /// Create an extractor with the built-in lexicon.
    pub fn new() -> Self {
        // Built-in platform patterns are constant and known to compile.
        Self::from_lexicon(Lexicon::default()).expect("built-in platform patterns are valid")
    }

    /// Create an extractor from a configured lexicon.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, ExtractionError> {
        let platforms = PlatformMatcher::compile_all(&lexicon.platforms)?;
        Ok(Self { lexicon, platforms })
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for ProfileExtractor {
    fn extract(&self, text: &str, additional_skills: &[String]) -> ResumeProfile {
        let profile = ResumeProfile {
            name: extract_name(text),
            email: extract_email(text),
            phone: extract_phone(text),
            education: extract_education(text, &self.lexicon.education),
            skills: extract_skills(text, &self.lexicon.skills, additional_skills),
            coding_profiles: extract_coding_profiles(text, &self.platforms),
            projects: extract_projects(text, &self.lexicon),
            publications: extract_publications(text, &self.lexicon),
        };

        debug!(
            "Extracted profile: {} skills, {} education keywords, {} coding profiles",
            profile.skills.len(),
            profile.education.len(),
            profile.coding_profiles.len()
        );

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::PlatformPattern;
    use crate::models::resume::{CodingProfile, NOT_FOUND};
    use pretty_assertions::assert_eq;

    const RESUME: &str = r#"
        priya sharma
        priya.sharma@example.com | +1 (415) 555-0134
        github.com/priyash | linkedin.com/in/priya-sharma

        Summary
        Backend engineer working with Python, Docker and Rust.

        Education
        B.Tech in Computer Science

        Projects
        Log search service in Rust
        Resume parser with FastAPI

        Publications
        Scaling regex heuristics, 2024
    "#;

    #[test]
    fn test_extract_full_profile() {
        let extractor = ProfileExtractor::new();
        let profile = extractor.extract(RESUME, &["Rust".to_string(), "Kubernetes".to_string()]);

        assert_eq!(profile.name, "Priya Sharma");
        assert_eq!(profile.email, "priya.sharma@example.com");
        assert_eq!(profile.phone, "+1 (415) 555-0134");
        assert_eq!(profile.education, vec!["B.Tech", "Computer Science"]);
        assert_eq!(profile.skills, vec!["Python", "FastAPI", "Docker", "Rust"]);
        assert_eq!(
            profile.coding_profiles,
            vec![
                CodingProfile {
                    platform: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/priya-sharma".into(),
                    details: "github.com/priyash | linkedin.com/in/priya-sharma".into(),
                },
                CodingProfile {
                    platform: "GitHub".into(),
                    url: "https://www.github.com/priyash".into(),
                    details: "github.com/priyash | linkedin.com/in/priya-sharma".into(),
                },
            ]
        );
        assert_eq!(
            profile.projects,
            "Log search service in Rust\n        Resume parser with FastAPI"
        );
        assert_eq!(profile.publications, "Scaling regex heuristics, 2024");
    }

    #[test]
    fn test_extract_sparse_text() {
        let profile = ProfileExtractor::new().extract("just some words", &[]);

        assert_eq!(profile.name, "Just Some Words");
        assert_eq!(profile.email, NOT_FOUND);
        assert_eq!(profile.phone, NOT_FOUND);
        assert!(profile.skills.is_empty());
        assert!(profile.coding_profiles.is_empty());
        assert_eq!(profile.projects, "");
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon {
            skills: vec!["Rust".into()],
            platforms: vec![PlatformPattern::new("GitLab", r"gitlab\.com/[a-zA-Z0-9_-]+")],
            ..Lexicon::default()
        };
        let extractor = ProfileExtractor::from_lexicon(lexicon).unwrap();
        let profile = extractor.extract("Rust and Python\ngitlab.com/dev", &[]);

        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.coding_profiles[0].url, "https://www.gitlab.com/dev");
    }

    #[test]
    fn test_invalid_platform_pattern_rejected() {
        let lexicon = Lexicon {
            platforms: vec![PlatformPattern::new("Broken", "[")],
            ..Lexicon::default()
        };
        assert!(ProfileExtractor::from_lexicon(lexicon).is_err());
    }
}
