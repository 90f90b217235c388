//! Common regex patterns for résumé extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern: optional country code, optional (area code), 3+4 digits
    pub static ref PHONE: Regex = Regex::new(
        r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}"
    ).unwrap();
}
