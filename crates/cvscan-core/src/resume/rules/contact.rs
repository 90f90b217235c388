//! Contact details: email, phone, and candidate name.

use super::patterns::{EMAIL, PHONE};
use crate::models::resume::{NOT_FOUND, UNKNOWN_CANDIDATE};

/// First email address in the text, or [`NOT_FOUND`].
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First phone number in the text, or [`NOT_FOUND`].
pub fn extract_phone(text: &str) -> String {
    PHONE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// Candidate name, taken as the first non-empty line, title-cased.
///
/// Résumés that open with a logo caption or a header line yield that line
/// instead of the name.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(title_case)
        .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string())
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
