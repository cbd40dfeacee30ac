//! String utilities for the domain layer.

/// Split a comma-separated list into trimmed, non-empty items.
///
/// Duplicates are dropped; the first occurrence keeps its position.
pub fn split_list(s: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        if !items.iter().any(|existing| existing == item) {
            items.push(item.to_string());
        }
    }
    items
}

/// Check whether two tag lists share at least one tag
pub fn intersects(left: &[String], right: &[String]) -> bool {
    left.iter().any(|tag| right.contains(tag))
}
