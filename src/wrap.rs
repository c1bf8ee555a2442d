//! Greedy word wrapping for panel body text.

/// Reflows `text` into lines of at most `width` characters, breaking on word
/// boundaries.
///
/// Words are joined with single spaces and kept in their original order.  A
/// single word longer than `width` is emitted on its own line without being
/// broken.  Empty or whitespace-only input yields no lines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Returns the wrapped lines joined with newlines.
pub fn wrap(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}
