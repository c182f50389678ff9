//! Tag normalization
//!
//! Tags arrive as one comma-separated string. Stored tags are trimmed,
//! lower-cased, non-empty, and unique (first occurrence wins).

/// Normalize a raw comma-separated tag string
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(|t| t.trim().to_lowercase()) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
