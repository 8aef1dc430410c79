// src/utils.rs
use crate::error::ApiError;

/// Trim a company name, rejecting empty or whitespace-only input
pub fn require_company_name(name: &str) -> Result<String, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Company name is required"));
    }
    Ok(trimmed.to_string())
}

/// Trim every name and drop the blank ones, keeping input order
pub fn clean_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Percent-encode a value for use as a single path segment or query value
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Check that `value` lies in `min..=max`, naming the offending parameter otherwise
pub fn require_in_range(name: &str, value: u32, min: u32, max: u32) -> Result<u32, ApiError> {
    if value < min || value > max {
        return Err(ApiError::validation(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )));
    }
    Ok(value)
}

/// Truncate to `max_chars` characters, appending "..." when anything was cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Case-insensitive substring test against any of `needles` (given in lowercase)
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}
