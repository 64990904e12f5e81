//! Line splitting for INI-style configuration text

mod span;
pub use span::Span;

mod line;
pub use line::Line;

mod reader;
pub use reader::LineReader;
