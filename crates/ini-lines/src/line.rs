//! Physical input lines.

use crate::Span;

/// One physical line of input, with its terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line number, 1-based.
    pub number: usize,
    /// Byte span of the line content (terminator excluded).
    pub span: Span,
    /// The raw text of the line.
    pub text: String,
}

impl Line {
    /// Create a new line.
    pub fn new(number: usize, span: Span, text: String) -> Self {
        Self { number, span, text }
    }

    /// The line text with leading and trailing whitespace removed.
    #[inline]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether the line contains nothing but whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Whether the raw line begins with a space or a tab.
    #[inline]
    pub fn is_indented(&self) -> bool {
        matches!(self.text.as_bytes().first(), Some(b' ' | b'\t'))
    }
}
