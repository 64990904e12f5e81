//! Line reader over buffered input streams.

use std::io::{self, BufRead};

use crate::{Line, Span};
use tracing::trace;

/// Reads physical lines from a buffered stream, one at a time.
///
/// Lines are terminated by `\n` or `\r\n`; the terminator is not part of the
/// yielded text. A final line without terminator is still yielded, and input
/// ending in a terminator does not produce a trailing empty line.
///
/// Input must be UTF-8. Invalid data is reported as an [`io::Error`] of kind
/// [`io::ErrorKind::InvalidData`]. The reader is fused after the first error.
pub struct LineReader<R> {
    reader: R,
    /// Scratch buffer reused for every line.
    buf: String,
    /// Number of the last line yielded.
    number: usize,
    /// Byte offset of the next line in the stream.
    offset: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            number: 0,
            offset: 0,
            done: false,
        }
    }

    /// Number of lines yielded so far.
    #[inline]
    pub fn lines_read(&self) -> usize {
        self.number
    }

    /// Byte offset of the next unread line.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Read the next physical line.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        if self.done {
            return Ok(None);
        }

        self.buf.clear();
        let read = match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                return Ok(None);
            }
            Ok(n) => n,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };

        let mut text = self.buf.as_str();
        if let Some(rest) = text.strip_suffix('\n') {
            text = rest.strip_suffix('\r').unwrap_or(rest);
        }

        self.number += 1;
        let span = Span::new(self.offset, self.offset + text.len());
        self.offset += read;
        trace!("Line {} at {:?}: {:?}", self.number, span, text);

        Ok(Some(Line::new(self.number, span, text.to_string())))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineReader<R> {}
