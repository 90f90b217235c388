//! Skill match scoring.

use std::collections::HashSet;

use crate::models::resume::ScoreResult;

/// Score found skills against required skills.
///
/// Matching ignores case. The score is the percentage of distinct required
/// skills (after lower-casing) that were found, rounded to 2 decimals, and is
/// zero when nothing is required. Missing skills are reported with the
/// caller's spelling and order; required entries that differ only in case
/// are all reported.
pub fn calculate_score<F, R>(found: &[F], required: &[R]) -> ScoreResult
where
    F: AsRef<str>,
    R: AsRef<str>,
{
    if required.is_empty() {
        return ScoreResult::default();
    }

    let found: HashSet<String> = found.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let wanted: HashSet<String> = required.iter().map(|s| s.as_ref().to_lowercase()).collect();

    let matched = wanted.intersection(&found).count();
    let missing: HashSet<&String> = wanted.difference(&found).collect();

    let score = round2(100.0 * matched as f64 / wanted.len() as f64);

    let missing_skills = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| missing.contains(&s.to_lowercase()))
        .map(str::to_string)
        .collect();

    ScoreResult {
        score,
        missing_skills,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: &[&str] = &[];

    #[test]
    fn test_empty_required_scores_zero() {
        let result = calculate_score(NONE, NONE);
        assert_eq!(result.score, 0.0);
        assert!(result.missing_skills.is_empty());

        let result = calculate_score(&["Python"], NONE);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_partial_match() {
        let result = calculate_score(&["Python", "SQL"], &["Python", "SQL", "Docker"]);
        assert_eq!(result.score, 66.67);
        assert_eq!(result.missing_skills, vec!["Docker"]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = calculate_score(&["python"], &["Python"]);
        assert_eq!(result.score, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_nothing_found() {
        let result = calculate_score(NONE, &["Rust", "Go"]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_missing_keeps_caller_order_and_casing() {
        let result = calculate_score(&["aws"], &["kubernetes", "AWS", "GraphQL", "Terraform"]);
        assert_eq!(result.score, 25.0);
        assert_eq!(result.missing_skills, vec!["kubernetes", "GraphQL", "Terraform"]);
    }

    #[test]
    fn test_case_duplicates_in_required() {
        // Both spellings are reported; the ratio uses distinct skills.
        let result = calculate_score(&["Python"], &["Docker", "docker", "Python"]);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.missing_skills, vec!["Docker", "docker"]);
    }

    #[test]
    fn test_extra_found_skills_do_not_inflate() {
        let result = calculate_score(&["Python", "SQL", "AWS", "Docker"], &["Python", "Go"]);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.missing_skills, vec!["Go"]);
    }
}
