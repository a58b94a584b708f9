//! Collapse single-element YAML sequences into plain scalars.
//!
//! Works line by line over a YAML block. Two spellings of a one-item sequence
//! are recognised and rewritten to `key: value`:
//!
//! ```yaml
//! ms.topic: [overview]
//! ms.author:
//!   - jdoe
//! ```
//!
//! Anything that is not clearly a one-item sequence of a plain scalar is left
//! byte-identical.

use crate::common::lines::{body, indent_width, is_blank_or_comment, split_lines, terminator};

/// A `key: value` line, possibly behind list-item markers.
#[derive(Debug, PartialEq, Eq)]
struct FieldLine<'a> {
    /// Everything up to and including the key's colon.
    head: &'a str,
    /// Column where the key starts.
    key_column: usize,
    /// Value text after the colon, surrounding whitespace removed.
    value: &'a str,
}

impl<'a> FieldLine<'a> {
    fn parse(text: &'a str) -> Option<Self> {
        let indent = text.len() - text.trim_start().len();
        let mut rest = &text[indent..];
        let mut key_column = indent_width(text);

        while let Some(after) = rest.strip_prefix("- ") {
            let after_trimmed = after.trim_start();
            key_column += 1 + (after.len() - after_trimmed.len()) + 1;
            rest = after_trimmed;
        }

        if rest.is_empty() || rest.starts_with(['#', '[', '{', '-', '?', '|', '>']) {
            return None;
        }

        let colon = key_end(rest)?;
        let head_len = text.len() - rest.len() + colon + 1;
        let value = text[head_len..].trim();

        Some(Self {
            head: &text[..head_len],
            key_column,
            value,
        })
    }
}

/// Byte index of the colon that terminates the key in `rest`.
fn key_end(rest: &str) -> Option<usize> {
    if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let close = closing_quote(rest, quote)?;
        return rest[close + 1..]
            .trim_start()
            .starts_with(':')
            .then(|| close + 1 + (rest[close + 1..].len() - rest[close + 1..].trim_start().len()));
    }

    let bytes = rest.as_bytes();
    for (i, b) in bytes.iter().copied().enumerate() {
        match b {
            b'#' if i > 0 && bytes[i - 1].is_ascii_whitespace() => return None,
            b':' => {
                let next = bytes.get(i + 1);
                if next.is_none_or(u8::is_ascii_whitespace) {
                    return (i > 0).then_some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte index of the quote closing the quoted scalar that starts `text`.
fn closing_quote(text: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            if quote == '\'' && text[i + 1..].starts_with('\'') {
                escaped = true;
                continue;
            }
            return Some(i);
        }
    }
    None
}

/// Whether `value` reads as a single plain or quoted scalar on one line.
fn is_inline_scalar(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') {
        return closing_quote(value, quote).is_some();
    }
    if value == "-"
        || value.starts_with("- ")
        || value.starts_with(['[', '{', '|', '>', '?', '#'])
    {
        return false;
    }
    !value.ends_with(':') && !value.contains(": ")
}

/// The sole item of a flow sequence such as `[value]`, with any text after
/// the closing bracket (a trailing comment) returned alongside.
fn single_flow_item(value: &str) -> Option<(&str, &str)> {
    let inner_start = value.strip_prefix('[')?;
    let mut items = Vec::new();
    let mut item_start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut close = None;

    for (i, c) in inner_start.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' && q == '"' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' | '{' => return None,
            ',' => {
                items.push(&inner_start[item_start..i]);
                item_start = i + 1;
            }
            ']' => {
                items.push(&inner_start[item_start..i]);
                close = Some(i);
                break;
            }
            _ => {}
        }
    }

    let close = close?;
    let trailing = &inner_start[close + 1..];
    let comment_only = trailing.starts_with([' ', '\t']) && trailing.trim_start().starts_with('#');
    if !(trailing.is_empty() || comment_only) {
        return None;
    }

    // `[a,]` still holds one element.
    if items.len() > 1 && items.last().is_some_and(|s| s.trim().is_empty()) {
        items.pop();
    }

    match items.as_slice() {
        [item] => {
            let item = item.trim();
            is_inline_scalar(item).then_some((item, trailing))
        }
        _ => None,
    }
}

/// The sole item of a block sequence opened by the field on `lines[key_index]`.
fn single_block_item<'a>(lines: &[&'a str], key_index: usize, key_column: usize) -> Option<&'a str> {
    let item_line = body(lines.get(key_index + 1).copied()?);
    let dash_column = indent_width(item_line);
    if dash_column < key_column {
        return None;
    }

    let item = item_line.trim_start().strip_prefix('-')?;
    if !item.starts_with([' ', '\t']) {
        return None;
    }
    let item = item.trim();
    if !is_inline_scalar(item) {
        return None;
    }

    let next_content = lines[key_index + 2..]
        .iter()
        .map(|line| body(line))
        .find(|text| !is_blank_or_comment(text));

    if let Some(text) = next_content {
        let column = indent_width(text);
        let rest = text.trim_start();
        let another_item = rest == "-" || rest.starts_with("- ") || rest.starts_with("-\t");
        if column > dash_column || (column == dash_column && another_item) {
            return None;
        }
    }

    Some(item)
}

/// Whether a field's value opens a literal or folded block scalar.
fn opens_block_scalar(value: &str) -> bool {
    value.starts_with(['|', '>'])
}

/// Rewrite every one-element sequence field in `block` to scalar form.
///
/// Fields holding zero or several items, nested collections and multi-line
/// values are copied unchanged, as is every line that is not part of a
/// rewritten field.
pub fn collapse_single_valued(block: &str) -> String {
    let lines = split_lines(block);
    let mut out = String::with_capacity(block.len());
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let text = body(line);

        let Some(field) = FieldLine::parse(text) else {
            out.push_str(line);
            index += 1;
            continue;
        };

        if let Some((item, trailing)) = single_flow_item(field.value) {
            out.push_str(field.head);
            out.push(' ');
            out.push_str(item);
            out.push_str(trailing);
            out.push_str(terminator(line));
            index += 1;
            continue;
        }

        if field.value.is_empty() {
            if let Some(item) = single_block_item(&lines, index, field.key_column) {
                let item_line = lines[index + 1];
                out.push_str(field.head);
                out.push(' ');
                out.push_str(item);
                out.push_str(terminator(item_line));
                index += 2;
                continue;
            }
        }

        out.push_str(line);
        index += 1;

        if opens_block_scalar(field.value) {
            while let Some(next) = lines.get(index) {
                let next_text = body(next);
                if !next_text.trim().is_empty() && indent_width(next_text) <= field.key_column {
                    break;
                }
                out.push_str(next);
                index += 1;
            }
        }
    }

    out
}
