//! Handler trait for receiving scanner events.

use std::convert::Infallible;

use crate::{Event, Location};

/// Receives events from the scanner, in document order.
///
/// Every method has a no-op default, so a handler only implements the events
/// it cares about. If a method returns an error, scanning stops immediately
/// and that error is handed back to the caller as [`Error::Handler`].
///
/// [`Error::Handler`]: crate::Error::Handler
pub trait Handler {
    /// Error type raised by this handler's callbacks.
    type Error;

    /// A whole-line comment. `text` includes the leading delimiter and has
    /// surrounding whitespace removed.
    fn comment(&mut self, location: &Location, text: &str) -> Result<(), Self::Error> {
        let _ = (location, text);
        Ok(())
    }

    /// A section header with a whitespace-normalized `name`.
    ///
    /// `location.section` is the name of the section before this one.
    fn section(&mut self, location: &Location, name: &str) -> Result<(), Self::Error> {
        let _ = (location, name);
        Ok(())
    }

    /// All values for a single key. `values` is never empty, but holds `""`
    /// for a key without a value.
    fn key_value(
        &mut self,
        location: &Location,
        key: &str,
        values: &[String],
    ) -> Result<(), Self::Error> {
        let _ = (location, key, values);
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Error = H::Error;

    fn comment(&mut self, location: &Location, text: &str) -> Result<(), Self::Error> {
        (**self).comment(location, text)
    }

    fn section(&mut self, location: &Location, name: &str) -> Result<(), Self::Error> {
        (**self).section(location, name)
    }

    fn key_value(
        &mut self,
        location: &Location,
        key: &str,
        values: &[String],
    ) -> Result<(), Self::Error> {
        (**self).key_value(location, key, values)
    }
}

impl Handler for Vec<Event> {
    type Error = Infallible;

    fn comment(&mut self, location: &Location, text: &str) -> Result<(), Self::Error> {
        self.push(Event::Comment {
            location: location.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn section(&mut self, location: &Location, name: &str) -> Result<(), Self::Error> {
        self.push(Event::Section {
            location: location.clone(),
            name: name.to_string(),
        });
        Ok(())
    }

    fn key_value(
        &mut self,
        location: &Location,
        key: &str,
        values: &[String],
    ) -> Result<(), Self::Error> {
        self.push(Event::KeyValue {
            location: location.clone(),
            key: key.to_string(),
            values: values.to_vec(),
        });
        Ok(())
    }
}
