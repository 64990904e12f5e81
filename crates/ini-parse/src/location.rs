//! Locations attached to parser events.

use std::fmt;

/// The physical location of an input element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number, 1-based.
    pub line: usize,
    /// Name of the most recent section header, or `""` before the first one.
    pub section: String,
}

impl Location {
    /// Create a new location.
    pub fn new(line: usize, section: impl Into<String>) -> Self {
        Self {
            line,
            section: section.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        if !self.section.is_empty() {
            write!(f, " in [{}]", self.section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Location::new(3, "").to_string(), "line 3");
        assert_eq!(Location::new(7, "user 1").to_string(), "line 7 in [user 1]");
    }
}
