//! Skill matching against a built-in list plus caller-supplied skills.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Compile a case-insensitive whole-word matcher for a skill name.
pub fn skill_regex(skill: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(skill));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping skill {:?}: {}", skill, e);
            None
        }
    }
}

/// Skills from `builtin` and `additional` that appear in the text as whole words.
///
/// Candidates are the union of both lists with exact duplicates removed,
/// built-in skills first. Matching ignores case; results keep the candidate's
/// own spelling and order.
pub fn extract_skills<B, A>(text: &str, builtin: &[B], additional: &[A]) -> Vec<String>
where
    B: AsRef<str>,
    A: AsRef<str>,
{
    let mut candidates: Vec<&str> = Vec::with_capacity(builtin.len() + additional.len());
    for skill in builtin
        .iter()
        .map(AsRef::as_ref)
        .chain(additional.iter().map(AsRef::as_ref))
    {
        if !skill.trim().is_empty() && !candidates.contains(&skill) {
            candidates.push(skill);
        }
    }

    candidates
        .into_iter()
        .filter(|skill| skill_regex(skill).is_some_and(|re| re.is_match(text)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Lexicon;
    use pretty_assertions::assert_eq;

    const NONE: &[&str] = &[];

    #[test]
    fn test_whole_word_only() {
        let found = extract_skills("Senior JavaScript engineer", &["Java", "JavaScript"], NONE);
        assert_eq!(found, vec!["JavaScript"]);
    }

    #[test]
    fn test_case_insensitive() {
        let found = extract_skills("python, DOCKER and aws", &Lexicon::default().skills, NONE);
        assert_eq!(found, vec!["Python", "Docker", "AWS"]);
    }

    #[test]
    fn test_multi_word_skill() {
        let found = extract_skills(
            "Applied machine learning to NLP problems",
            &Lexicon::default().skills,
            NONE,
        );
        assert_eq!(found, vec!["Machine Learning", "NLP"]);
    }

    #[test]
    fn test_additional_skills_are_unioned() {
        let found = extract_skills("Rust, Go and SQL", &["SQL"], &["Rust", "Kotlin", "SQL"]);
        assert_eq!(found, vec!["SQL", "Rust"]);
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let found = extract_skills("Built services in node.js", NONE, &["Node.js", "node js"]);
        assert_eq!(found, vec!["Node.js"]);

        // Unescaped, "." would match any character.
        let found = extract_skills("Built services in nodexjs", NONE, &["Node.js"]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_blank_skills_ignored() {
        let found = extract_skills("Python", &["", "  "], &["Python"]);
        assert_eq!(found, vec!["Python"]);
    }
}
