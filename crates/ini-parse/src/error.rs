//! Error types for INI scanning.

use std::fmt;
use std::io;

use crate::{Location, Span};

/// Kind of syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Section header without a closing `]`.
    UnclosedHeader,
    /// Section name that is empty or contains `[` or `]`.
    InvalidSection,
    /// Nothing but whitespace before `=`.
    EmptyKey,
}

impl SyntaxErrorKind {
    /// Fixed description of this error kind.
    pub fn description(self) -> &'static str {
        match self {
            Self::UnclosedHeader => "unclosed section header",
            Self::InvalidSection => "invalid section name",
            Self::EmptyKey => "empty key",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A syntax problem in INI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Where the error occurred.
    pub location: Location,
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// The key or section name affected, if applicable.
    pub name: Option<String>,
    /// Byte span of the offending line.
    pub span: Span,
}

impl SyntaxError {
    pub fn new(
        location: Location,
        kind: SyntaxErrorKind,
        name: Option<String>,
        span: Span,
    ) -> Self {
        Self {
            location,
            kind,
            name,
            span,
        }
    }

    /// Line number of the error, 1-based.
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// The affected name, or `""` if there is none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.location.line, self.kind)?;
        if !self.name().is_empty() {
            write!(f, ": {}", self.name())?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Error that stops a scan.
///
/// `E` is the error type of the [`Handler`](crate::Handler) in use.
#[derive(Debug)]
pub enum Error<E> {
    /// The input is not valid INI.
    Syntax(SyntaxError),
    /// A handler callback failed; the value is exactly what it returned.
    Handler(E),
    /// Reading the next line from the input failed.
    Io(io::Error),
}

impl<E> Error<E> {
    /// The syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this is a syntax error.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// The handler's error, if this is one.
    pub fn into_handler(self) -> Option<E> {
        match self {
            Error::Handler(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<SyntaxError> for Error<E> {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl<E> From<io::Error> for Error<E> {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Handler(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "read error: {}", err),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(_) => None,
            Error::Handler(err) => err.source(),
            Error::Io(err) => Some(err),
        }
    }
}
