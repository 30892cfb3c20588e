//! Line wrapping for tooltip text.

/// Greedily wraps `text` so no line exceeds `max_line_length` characters.
///
/// Existing line breaks are kept. Every produced line, including the last one,
/// is terminated by `\n`. A word longer than the limit is placed on a line of
/// its own.
pub fn wrap_text(text: &str, max_line_length: usize) -> String {
    wrap_lines(text, max_line_length)
        .into_iter()
        .fold(String::with_capacity(text.len() + 8), |mut acc, line| {
            acc.push_str(&line);
            acc.push('\n');
            acc
        })
}

/// Same as [`wrap_text`] without the line terminators.
pub fn wrap_lines(text: &str, max_line_length: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in source_line.split_whitespace() {
            let word_len = word.chars().count();

            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
                continue;
            }

            if current_len + 1 + word_len <= max_line_length {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }

            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }

        lines.push(current);
    }

    lines
}
