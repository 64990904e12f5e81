#![doc = include_str!("../README.md")]

pub use ini_lines::Span;

mod tracing_macros;

mod callback;
pub use callback::Handler;

mod diagnostic;

mod error;
pub use error::{Error, SyntaxError, SyntaxErrorKind};

mod event;
pub use event::Event;

mod location;
pub use location::Location;

mod options;
pub use options::ScanOptions;

mod scanner;
pub use scanner::{Scanner, normalize_whitespace, parse, parse_str};
