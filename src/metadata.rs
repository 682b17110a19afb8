//! Article metadata normalization.
//!
//! The author fills in free-form text fields; the manifest wants clean values.
//! Every field is trimmed, and the rules for what counts as "absent" live here
//! so the builder and the CLI output agree on them:
//!
//! - **Optional text** (author, summary): empty after trimming → `None`,
//!   which serializes as `null` in `article.json`.
//! - **Tags**: the raw field is split on commas, each piece trimmed, empty
//!   pieces dropped. Order and duplicates are preserved as entered.

/// Trimmed value, or `None` when nothing but whitespace remains.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a comma-separated tag field.
///
/// ```text
/// "a, b,, c "  →  ["a", "b", "c"]
/// "x, x"       →  ["x", "x"]
/// ""           →  []
/// ```
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
