//! Multi-line text buffers for action items and key decisions.
//!
//! Dialog text areas hold one item per line. Converting back and forth must
//! satisfy `split_lines(&join_lines(items)) == items` for non-blank,
//! newline-free items.

/// Splits a text-area buffer into items, one per line.
///
/// Lines that are empty or whitespace-only are dropped. Kept lines are
/// returned verbatim apart from a trailing `\r` left over from CRLF input.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders items back into a text-area buffer.
pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}
