//! Locate the YAML front-matter block of a Markdown document.

use std::ops::Range;

use crate::common::lines::{body, split_lines};

/// Line that opens and closes a front-matter block.
pub const DELIMITER: &str = "---";

/// Byte range of the front-matter block inside `content`, delimiters excluded.
///
/// The first line must be exactly `---` and the block ends at the next line
/// that is exactly `---`. Returns `None` when the document has no opening
/// delimiter, no closing delimiter, or an empty block.
pub fn locate(content: &str) -> Option<Range<usize>> {
    let lines = split_lines(content);
    let (first, rest) = lines.split_first()?;
    if body(first) != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in rest {
        if body(line) == DELIMITER {
            return (offset > start).then_some(start..offset);
        }
        offset += line.len();
    }

    None
}
