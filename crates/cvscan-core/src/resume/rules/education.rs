//! Education keyword detection.

/// Keywords contained anywhere in the text, ignoring case.
///
/// Results follow keyword order with duplicates removed.
pub fn extract_education<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if haystack.contains(&keyword.to_lowercase()) && !found.iter().any(|k| k == keyword) {
            found.push(keyword.to_string());
        }
    }

    found
}
