use std::io::Write;

use tracing::warn;

/// Where lexical errors go. The scanner calls `report` and never looks back.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, message: &str);
}

impl<F> ErrorReporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// Prints `[line N] Error: message` and remembers that something went wrong.
pub struct ConsoleReporter<W: Write> {
    writer: W,
    had_error: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> ConsoleReporter<W> {
        ConsoleReporter {
            writer,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Between prompt lines, so one bad line doesn't mark the whole session.
    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, line: usize, message: &str) {
        self.had_error = true;
        if let Err(err) = writeln!(self.writer, "[line {line}] Error: {message}") {
            warn!(%err, line, "could not write diagnostic");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::reporter::{ConsoleReporter, ErrorReporter};

    #[test]
    fn test_console_reporter_formats_and_flags() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        assert!(!reporter.had_error());
        reporter.report(3, "Unexpected character.");
        assert!(reporter.had_error());
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "[line 3] Error: Unexpected character.\n");
    }

    #[test]
    fn test_reset_clears_flag() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(1, "Unterminated string.");
        reporter.reset();
        assert!(!reporter.had_error());
    }

    #[test]
    fn test_closures_are_reporters() {
        let mut lines = vec![];
        let mut reporter = |line: usize, _message: &str| lines.push(line);
        reporter.report(2, "boom");
        reporter.report(5, "boom");
        assert_eq!(lines, vec![2, 5]);
    }
}
