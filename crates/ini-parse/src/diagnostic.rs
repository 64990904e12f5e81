//! Diagnostic rendering for syntax errors.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::{SyntaxError, SyntaxErrorKind};

impl SyntaxError {
    /// Render this error with ariadne.
    ///
    /// `source` must be the complete text that was scanned. Returns a string
    /// containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        self.render_with(filename, source, true)
    }

    /// Like [`render`](Self::render), without ANSI colour codes.
    pub fn render_plain(&self, filename: &str, source: &str) -> String {
        self.render_with(filename, source, false)
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let _ = self
            .build_report(filename, true)
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn render_with(&self, filename: &str, source: &str, color: bool) -> String {
        let mut output = Vec::new();
        let _ = self
            .build_report(filename, color)
            .finish()
            .write((filename, Source::from(source)), &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
        color: bool,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let config = Config::default()
            .with_color(color)
            .with_index_type(IndexType::Byte);

        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_config(config)
            .with_message(self.kind.description());

        match self.kind {
            SyntaxErrorKind::UnclosedHeader => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("section header opened here")
                        .with_color(Color::Red),
                )
                .with_help("add a closing ']'"),

            SyntaxErrorKind::InvalidSection => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("invalid name '{}'", self.name()))
                        .with_color(Color::Red),
                )
                .with_help("section names must be non-empty and cannot contain '[' or ']'"),

            SyntaxErrorKind::EmptyKey => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("no key before '='")
                        .with_color(Color::Red),
                )
                .with_help("write the key name before '='"),
        }
    }
}
