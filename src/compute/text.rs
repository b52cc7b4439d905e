//! Case-insensitive text matching for attribute search.

/// Returns true when `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches every haystack.
///
/// ```
/// use kdroster::compute::text::contains_ignore_case;
///
/// assert!(contains_ignore_case("María López", "LÓP"));
/// assert!(contains_ignore_case("anything", ""));
/// assert!(!contains_ignore_case("Ana", "bob"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
