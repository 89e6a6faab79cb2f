//! File-name-safe slugs for exported assets.

/// Convert a display name to a lowercase, hyphen-separated slug.
///
/// Runs of non-alphanumeric characters collapse to a single `-`; leading and
/// trailing separators are dropped.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
