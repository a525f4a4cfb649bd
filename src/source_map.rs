//! Functionality for looking up character ranges in the source code.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`. A position at the very end of
/// the source belongs to the last line. Returns [`None`] for positions past
/// the end of the source.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext> {
    let mut position = Bytes::new(0);
    let lines: Vec<&str> = inclusive_split_lines(source);
    let last_line = lines.len() - 1;

    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        let contains = target_position < end_position
            || (line_idx == last_line && target_position == end_position);
        if target_position >= position && contains {
            return Some(LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            });
        }
        position = end_position;
    }

    None
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut char_enum = source.chars().peekable();

    while let Some(ch) = char_enum.next() {
        position += ch.len_utf8();

        // If we find an \r followed by an \n, delay recognising the line until the next iteration.
        if ch == '\n' || (ch == '\r' && char_enum.peek() != Some(&'\n')) {
            seen_lines.push(&source[start..position]);
            start = position;
        }
    }
    seen_lines.push(&source[start..position]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// The number of characters between the start of the line and `position`.
    pub fn column(&self, position: Bytes) -> usize {
        let offset = usize::from(position - self.range.start()).min(self.source.len());
        self.source
            .get(..offset)
            .map_or(0, |prefix| prefix.chars().count())
    }
}
