// Output formatting — terminal display of judge results.

pub mod terminal;

/// Shorten a page title to `max_chars` characters for table columns.
///
/// Cuts on a char boundary and marks the cut with "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
