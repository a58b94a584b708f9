//! Line-oriented helpers that keep original line endings intact.
//!
//! Every scan in this crate works over an indexed slice of lines rather than
//! multiline regular expressions. Lines returned by [`split_lines`] still carry
//! their terminator so that joining them reproduces the input byte for byte.

/// Split text into lines, keeping each line's `\n` / `\r\n` terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// The line without its terminator.
pub fn body(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The terminator of a line (`""`, `"\n"` or `"\r\n"`).
pub fn terminator(line: &str) -> &str {
    &line[body(line).len()..]
}

/// Number of leading whitespace characters.
pub fn indent_width(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// True for lines that carry no YAML content.
pub fn is_blank_or_comment(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}
