//! Single-pass line scanner for INI text.

use std::convert::Infallible;
use std::io::BufRead;
use std::mem;

use ini_lines::{Line, LineReader};

use crate::error::{Error, SyntaxError, SyntaxErrorKind};
use crate::{Event, Handler, Location, ScanOptions};
#[allow(unused_imports)]
use crate::{debug, trace};


/// Accumulation state for the most recent `key = value` line.
#[derive(Debug, Default)]
enum Pending {
    /// No key is waiting for values.
    #[default]
    Empty,
    /// A key whose values are still being collected.
    Accumulating {
        key: String,
        /// Where the key first appeared.
        origin: Location,
        values: Vec<String>,
    },
}

impl Pending {
    fn is_key(&self, name: &str) -> bool {
        matches!(self, Pending::Accumulating { key, .. } if key == name)
    }
}

/// Event-based scanner for INI documents.
///
/// The scanner reads its input one physical line at a time and calls the
/// [`Handler`] in document order. It holds only the current line and the
/// values of the one key still accumulating.
///
/// Supported syntax:
///
/// ```text
/// ; whole-line comment
/// [section name]
/// key = value
///
/// ; "a long key" has value "value   village"
/// a    long     key = value   village
///
/// ; letter has values alpha, bravo
/// letter = alpha
///     bravo
///
/// ; number has values 1, 2
/// number =
///     1
///     2
///
/// ; bare has value ""
/// bare
/// ```
///
/// Blank lines are ignored, including inside a run of indented values.
/// Comments are whole-line only.
pub struct Scanner<R> {
    lines: LineReader<R>,
    options: ScanOptions,
    /// Name of the most recent section header.
    section: String,
    pending: Pending,
}

impl<R: BufRead> Scanner<R> {
    /// Create a new scanner with default options.
    pub fn new(input: R) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    /// Create a new scanner with the given options.
    pub fn with_options(input: R, options: ScanOptions) -> Self {
        Self {
            lines: LineReader::new(input),
            options,
            section: String::new(),
            pending: Pending::Empty,
        }
    }

    /// Scan the whole input, delivering events to `handler`.
    ///
    /// Stops at the first syntax error, handler error, or read error. Nothing
    /// is delivered after an error, including a key still accumulating.
    pub fn scan<H: Handler + ?Sized>(mut self, handler: &mut H) -> Result<(), Error<H::Error>> {
        debug!("scanning");
        while let Some(line) = self.lines.next_line()? {
            self.scan_line(&line, handler)?;
        }
        self.flush(handler)?;
        debug!(lines = self.lines.lines_read(), "scan complete");
        Ok(())
    }

    /// Convenience: scan and collect all events.
    pub fn scan_to_vec(self) -> Result<Vec<Event>, Error<Infallible>> {
        let mut events = Vec::new();
        self.scan(&mut events)?;
        Ok(events)
    }

    fn location(&self, line: &Line) -> Location {
        Location::new(line.number, self.section.as_str())
    }

    fn scan_line<H: Handler + ?Sized>(
        &mut self,
        line: &Line,
        handler: &mut H,
    ) -> Result<(), Error<H::Error>> {
        let clean = line.trimmed();
        if clean.is_empty() {
            return Ok(());
        }

        if self.options.is_comment(clean) {
            trace!("Line {}: comment", line.number);
            self.flush(handler)?;
            return handler
                .comment(&self.location(line), clean)
                .map_err(Error::Handler);
        }

        if let Some(header) = clean.strip_prefix('[') {
            return self.scan_section(line, header, handler);
        }

        let Some((left, right)) = clean.split_once('=') else {
            return self.scan_bare(line, clean, handler);
        };

        let key = normalize_whitespace(left);
        if key.is_empty() {
            return Err(self.syntax_error(line, SyntaxErrorKind::EmptyKey, None).into());
        }
        let value = right.trim().to_string();
        trace!("Line {}: {:?} = {:?}", line.number, key, value);

        if !self.pending.is_key(&key) {
            self.flush(handler)?;
            self.pending = Pending::Accumulating {
                key,
                origin: self.location(line),
                values: Vec::new(),
            };
        }
        if let Pending::Accumulating { values, .. } = &mut self.pending {
            values.push(value);
        }
        Ok(())
    }

    /// `header` is the trimmed line after its opening `[`.
    fn scan_section<H: Handler + ?Sized>(
        &mut self,
        line: &Line,
        header: &str,
        handler: &mut H,
    ) -> Result<(), Error<H::Error>> {
        let Some(interior) = header.strip_suffix(']') else {
            return Err(self
                .syntax_error(line, SyntaxErrorKind::UnclosedHeader, Some(header))
                .into());
        };

        let name = normalize_whitespace(interior);
        if name.is_empty() || name.contains(['[', ']']) {
            return Err(self
                .syntax_error(line, SyntaxErrorKind::InvalidSection, Some(&name))
                .into());
        }

        trace!("Line {}: section {:?}", line.number, name);
        self.flush(handler)?;
        handler
            .section(&self.location(line), &name)
            .map_err(Error::Handler)?;
        self.section = name;
        Ok(())
    }

    /// A line with no `=`: either another value for the pending key, or a
    /// key of its own with an empty value.
    fn scan_bare<H: Handler + ?Sized>(
        &mut self,
        line: &Line,
        clean: &str,
        handler: &mut H,
    ) -> Result<(), Error<H::Error>> {
        if line.is_indented()
            && let Pending::Accumulating { values, .. } = &mut self.pending
        {
            trace!("Line {}: continuation {:?}", line.number, clean);
            // `key =` with nothing after it takes its first real value here.
            if values.len() == 1 && values[0].is_empty() {
                values[0] = clean.to_string();
            } else {
                values.push(clean.to_string());
            }
            return Ok(());
        }

        // Without an `=` there is nothing to continue from, so the key is
        // delivered right away instead of becoming pending.
        trace!("Line {}: bare key {:?}", line.number, clean);
        self.flush(handler)?;
        handler
            .key_value(
                &self.location(line),
                &normalize_whitespace(clean),
                &[String::new()],
            )
            .map_err(Error::Handler)
    }

    /// Deliver the pending key, if any, and clear it.
    fn flush<H: Handler + ?Sized>(&mut self, handler: &mut H) -> Result<(), Error<H::Error>> {
        if let Pending::Accumulating {
            key,
            origin,
            values,
        } = mem::take(&mut self.pending)
        {
            trace!("Flushing {:?} from line {}: {:?}", key, origin.line, values);
            handler
                .key_value(&origin, &key, &values)
                .map_err(Error::Handler)?;
        }
        Ok(())
    }

    fn syntax_error(&self, line: &Line, kind: SyntaxErrorKind, name: Option<&str>) -> SyntaxError {
        let err = SyntaxError::new(
            self.location(line),
            kind,
            name.map(str::to_string),
            line.span,
        );
        debug!(%err, "syntax error");
        err
    }
}

/// Scan INI data from `input`, delivering events to `handler`.
///
/// Syntax problems are reported as [`Error::Syntax`], and carry the line
/// number and affected name.
pub fn parse<R: BufRead, H: Handler + ?Sized>(
    input: R,
    handler: &mut H,
) -> Result<(), Error<H::Error>> {
    Scanner::new(input).scan(handler)
}

/// Scan INI text held in memory.
pub fn parse_str<H: Handler + ?Sized>(source: &str, handler: &mut H) -> Result<(), Error<H::Error>> {
    parse(source.as_bytes(), handler)
}

/// Replace each run of whitespace with a single space, and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
