//! Event types for the INI event-based parser.

use crate::Location;

/// Events delivered by the scanner, as recorded by the collecting handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Whole-line comment `; ...`.
    Comment {
        /// Where the comment appeared.
        location: Location,
        /// Comment text, including the delimiter, outer-trimmed.
        text: String,
    },
    /// Section header `[name]`.
    Section {
        /// Where the header appeared. `location.section` is the previous section.
        location: Location,
        /// Whitespace-normalized section name.
        name: String,
    },
    /// A key with one or more values.
    KeyValue {
        /// Where the key first appeared.
        location: Location,
        /// Whitespace-normalized key.
        key: String,
        /// Values in input order; never empty.
        values: Vec<String>,
    },
}

impl Event {
    /// Get the location for this event.
    pub fn location(&self) -> &Location {
        match self {
            Event::Comment { location, .. } => location,
            Event::Section { location, .. } => location,
            Event::KeyValue { location, .. } => location,
        }
    }

    /// Line number of this event.
    pub fn line(&self) -> usize {
        self.location().line
    }
}
