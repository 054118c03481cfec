use crate::pattern::Pattern;

/// Removes the first occurrence of `pattern` from `text`. Later occurrences
/// are left untouched. No match is a no-op, not an error: the input comes
/// back unchanged, so re-running against an already-clean document does
/// nothing.
pub fn deduplicate(text: &str, pattern: &Pattern) -> String {
    match pattern.find(text) {
        Some(range) => {
            let mut result = String::with_capacity(text.len() - range.len());
            result.push_str(&text[..range.start]);
            result.push_str(&text[range.end..]);
            result
        }
        None => text.to_string(),
    }
}
