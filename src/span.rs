use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive rectangle of source text.
///
/// Lines and columns are both 1-indexed; column 1 is the first grapheme
/// of a line. Every token and every diagnostic carries one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First line covered (1-indexed)
    pub line_start: u32,
    /// Last line covered (inclusive)
    pub line_end: u32,
    /// First column covered (1-indexed)
    pub column_start: u32,
    /// Last column covered (inclusive)
    pub column_end: u32,
}

impl Span {
    /// A span covering `column_start..=column_end` on a single line.
    pub fn single_line(line: u32, column_start: u32, column_end: u32) -> Self {
        Span {
            line_start: line,
            line_end: line,
            column_start,
            column_end,
        }
    }

    /// A one-grapheme span.
    pub fn point(line: u32, column: u32) -> Self {
        Span::single_line(line, column, column)
    }

    /// The smallest span covering both operands.
    pub fn merge(self, other: Span) -> Span {
        Span {
            line_start: self.line_start.min(other.line_start),
            line_end: self.line_end.max(other.line_end),
            column_start: self.column_start.min(other.column_start),
            column_end: self.column_end.max(other.column_end),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.line_start == self.line_end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() && self.column_start == self.column_end {
            write!(f, "{}:{}", self.line_start, self.column_start)
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.line_start, self.column_start, self.line_end, self.column_end
            )
        }
    }
}
