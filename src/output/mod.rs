// Output formatting: terminal display of topic cards and theme listings.

pub mod terminal;

/// Clip text to `max_chars` characters plus "...". Counts chars, not bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
