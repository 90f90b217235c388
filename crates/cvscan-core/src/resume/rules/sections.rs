//! Section scraping by header lines.

use crate::models::config::Lexicon;

/// Header phrases and boundaries for [`extract_section`].
#[derive(Debug, Clone)]
pub struct SectionHeaders<'a, S: AsRef<str>> {
    /// Section names that end a capture.
    pub generic: &'a [S],
    /// Lines must be shorter than this to count as a generic header.
    pub max_header_len: usize,
}

impl<'a> SectionHeaders<'a, String> {
    pub fn from_lexicon(lexicon: &'a Lexicon) -> Self {
        Self {
            generic: &lexicon.section_headers,
            max_header_len: lexicon.max_header_len,
        }
    }
}

/// Capture the lines following a target header up to the next section header.
///
/// A line is a target header when its lower-cased trimmed form contains any
/// of `targets`. A line is a generic header when it contains any generic
/// section name and is shorter than `max_header_len`, so body text that
/// happens to mention "experience" does not end the capture. Header lines are
/// never part of the result.
pub fn extract_section<T, S>(text: &str, targets: &[T], headers: SectionHeaders<'_, S>) -> String
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let targets = lowercased(targets);
    let generic = lowercased(headers.generic);

    let mut capturing = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in text.lines() {
        let clean = line.trim().to_lowercase();

        let is_target = targets.iter().any(|t| clean.contains(t.as_str()));
        if is_target {
            capturing = true;
            continue;
        }

        if !capturing {
            continue;
        }

        let is_header = clean.chars().count() < headers.max_header_len
            && generic.iter().any(|h| clean.contains(h.as_str()));
        if is_header {
            break;
        }

        captured.push(line);
    }

    captured.join("\n").trim().to_string()
}

fn lowercased<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    phrases.iter().map(|p| p.as_ref().to_lowercase()).collect()
}

/// Text of the projects section, or an empty string.
pub fn extract_projects(text: &str, lexicon: &Lexicon) -> String {
    extract_section(text, &lexicon.project_headers, SectionHeaders::from_lexicon(lexicon))
}

/// Text of the publications section, or an empty string.
pub fn extract_publications(text: &str, lexicon: &Lexicon) -> String {
    extract_section(text, &lexicon.publication_headers, SectionHeaders::from_lexicon(lexicon))
}
