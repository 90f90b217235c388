//! Configuration structures for the screening pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the cvscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvscanConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Keyword and pattern lists used by the field extractors.
    pub lexicon: Lexicon,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Trimmed length below which the next extraction backend is consulted.
    pub min_text_length: usize,

    /// Trimmed length below which a document is reported as unreadable.
    pub unreadable_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 10,
            unreadable_text_length: 5,
        }
    }
}

/// A known coding platform and the URL fragment that identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPattern {
    /// Display name (e.g. "GitHub").
    pub platform: String,

    /// Regex matching the profile URL without scheme or `www.`.
    pub pattern: String,
}

impl PlatformPattern {
    pub fn new(platform: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            pattern: pattern.into(),
        }
    }
}

/// Static keyword lists driving the heuristic extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Built-in skills, unioned with caller-supplied skills before matching.
    pub skills: Vec<String>,

    /// Degree abbreviations and field names.
    pub education: Vec<String>,

    /// Known coding platforms, scanned in this order.
    pub platforms: Vec<PlatformPattern>,

    /// Section names that end a captured section.
    pub section_headers: Vec<String>,

    /// Header phrases that start the projects section.
    pub project_headers: Vec<String>,

    /// Header phrases that start the publications section.
    pub publication_headers: Vec<String>,

    /// A line only counts as a section header when shorter than this.
    pub max_header_len: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            skills: strings(&[
                "Python",
                "Machine Learning",
                "NLP",
                "FastAPI",
                "Docker",
                "AWS",
                "SQL",
            ]),
            education: strings(&[
                "B.Tech",
                "M.Tech",
                "B.Sc",
                "M.Sc",
                "PhD",
                "Bachelor",
                "Master",
                "Diploma",
                "Computer Science",
                "Engineering",
                "MBA",
                "BCA",
                "MCA",
            ]),
            platforms: vec![
                PlatformPattern::new("LinkedIn", r"linkedin\.com/in/[a-zA-Z0-9_-]+"),
                PlatformPattern::new("GitHub", r"github\.com/[a-zA-Z0-9_-]+"),
                PlatformPattern::new("LeetCode", r"leetcode\.com/[a-zA-Z0-9_-]+"),
                PlatformPattern::new("HackerRank", r"hackerrank\.com/[a-zA-Z0-9_-]+"),
                PlatformPattern::new("CodeChef", r"codechef\.com/users/[a-zA-Z0-9_-]+"),
                PlatformPattern::new("Kaggle", r"kaggle\.com/[a-zA-Z0-9_-]+"),
            ],
            section_headers: strings(&[
                "skills",
                "education",
                "experience",
                "projects",
                "publications",
                "certifications",
                "achievements",
                "summary",
                "objective",
                "languages",
            ]),
            project_headers: strings(&["projects", "personal projects", "academic projects"]),
            publication_headers: strings(&[
                "publications",
                "research papers",
                "papers published",
            ]),
            max_header_len: 30,
        }
    }
}

impl CvscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
