use std::ops::Range;

/// A 1-indexed line/column position in the source document.
///
/// Columns count bytes, not characters. A column of `0` is a sentinel: it marks
/// the virtual position at the start of a line, used when a node's source ends
/// with a line terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The source extent of a parse node.
///
/// `start` is the first byte of the node. `end` is its last byte (inclusive),
/// or the sentinel `(next line, 0)` when that last byte is a newline. Callers
/// must not assume `end` lands on real content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub const fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Returns a span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: SourceSpan) -> SourceSpan {
        SourceSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Maps byte offsets of a document to [`SourcePosition`]s.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first byte of every line.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    /// Position of the byte at `offset`. Offsets past the end clamp to the
    /// position just after the last byte.
    pub fn position(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        SourcePosition::new(line, offset - line_start + 1)
    }

    /// Converts a byte range into a [`SourceSpan`].
    pub fn span(&self, range: Range<usize>) -> SourceSpan {
        let start = self.position(range.start);
        if range.end <= range.start {
            return SourceSpan::new(start, start);
        }

        let last = range.end - 1;
        let end = if self.text.as_bytes().get(last) == Some(&b'\n') {
            SourcePosition::new(self.position(last).line + 1, 0)
        } else {
            self.position(last)
        };
        SourceSpan::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_is_line_one_column_one() {
        let index = LineIndex::new("hello");
        assert_eq!(index.position(0), SourcePosition::new(1, 1));
    }

    #[test]
    fn positions_after_newline_start_next_line() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.position(3), SourcePosition::new(2, 1));
        assert_eq!(index.position(4), SourcePosition::new(2, 2));
        assert_eq!(index.position(6), SourcePosition::new(3, 1));
        assert_eq!(index.position(7), SourcePosition::new(4, 1));
    }

    #[test]
    fn span_end_is_inclusive() {
        let index = LineIndex::new("Hello there");
        let span = index.span(0..11);
        assert_eq!(span.start, SourcePosition::new(1, 1));
        assert_eq!(span.end, SourcePosition::new(1, 11));
    }

    #[test]
    fn span_ending_in_newline_uses_sentinel() {
        let index = LineIndex::new("- a\n- b\n\nnext");
        let span = index.span(0..8);
        assert_eq!(span.start, SourcePosition::new(1, 1));
        assert_eq!(span.end, SourcePosition::new(3, 0));
    }

    #[test]
    fn empty_range_collapses_to_start() {
        let index = LineIndex::new("abc");
        let span = index.span(2..2);
        assert_eq!(span.start, span.end);
        assert_eq!(span.start, SourcePosition::new(1, 3));
    }

    #[test]
    fn offsets_past_end_clamp() {
        let index = LineIndex::new("ab");
        assert_eq!(index.position(99), SourcePosition::new(1, 3));
    }

    #[test]
    fn columns_count_bytes() {
        let index = LineIndex::new("é!");
        assert_eq!(index.position(2), SourcePosition::new(1, 3));
    }

    #[test]
    fn cover_spans_both() {
        let a = SourceSpan::new(SourcePosition::new(1, 4), SourcePosition::new(1, 8));
        let b = SourceSpan::new(SourcePosition::new(1, 9), SourcePosition::new(2, 2));
        let c = a.cover(b);
        assert_eq!(c.start, SourcePosition::new(1, 4));
        assert_eq!(c.end, SourcePosition::new(2, 2));
    }
}
