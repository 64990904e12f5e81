//! Scanner options.

/// Options for INI scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Characters that start a whole-line comment (default: `;`)
    pub comment_prefixes: Vec<char>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            comment_prefixes: vec![';'],
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also treat lines starting with `prefix` as comments.
    pub fn comment_prefix(mut self, prefix: char) -> Self {
        if !self.comment_prefixes.contains(&prefix) {
            self.comment_prefixes.push(prefix);
        }
        self
    }

    /// Whether a trimmed, non-blank line is a comment.
    #[inline]
    pub(crate) fn is_comment(&self, clean: &str) -> bool {
        clean
            .chars()
            .next()
            .is_some_and(|c| self.comment_prefixes.contains(&c))
    }
}
