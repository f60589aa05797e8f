use crate::cursor::Cursor;
use std::borrow::Cow;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A parse error: what went wrong and the byte offset where it was detected
///
/// This is the only error shape the combinators produce. The descriptive text
/// comes entirely from the matcher or grammar that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at offset {offset})")]
pub struct ParseError {
    message: Cow<'static, str>,
    offset: usize,
}

impl ParseError {
    pub fn new(message: impl Into<Cow<'static, str>>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A failed parse step
///
/// Carries the cursor the failing operation is anchored at together with the
/// error. The cursor stays usable for diagnostics such as
/// [`Cursor::line_offset`].
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Failure<'src> {
    cursor: Cursor<'src>,
    error: ParseError,
}

impl<'src> Failure<'src> {
    pub fn new(cursor: Cursor<'src>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            error: ParseError::new(message, cursor.offset()),
            cursor,
        }
    }

    pub fn cursor(&self) -> Cursor<'src> {
        self.cursor
    }

    /// Offset of the anchoring cursor
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn error(&self) -> &ParseError {
        &self.error
    }

    pub fn message(&self) -> &str {
        self.error.message()
    }

    pub fn into_error(self) -> ParseError {
        self.error
    }

    /// Re-anchor this failure at `cursor`, keeping the error as reported
    pub fn rewind(self, cursor: Cursor<'src>) -> Self {
        Self { cursor, ..self }
    }

    /// Replace the message, keeping the cursor and the error offset
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            error: ParseError::new(message, self.error.offset),
            ..self
        }
    }

    /// Format the error with its line, column and the offending source line
    ///
    /// ```text
    /// error at line 2, column 5: unable to match ;
    ///   > 2 | select name from
    ///             ^--- here
    /// ```
    pub fn render(&self) -> String {
        let at = self.cursor.moved_to(self.error.offset);
        let (position, line) = match (at.line_offset(), at.line_text()) {
            (Ok(position), Ok(line)) => (position, line),
            _ => return format!("error at offset {}: {}", self.error.offset, self.message()),
        };

        let prefix = format!("  > {} | ", position.line);
        let pointer = " ".repeat(prefix.len() + position.column - 1);
        format!(
            "error at {}: {}\n{}{}\n{}^--- here",
            position,
            self.message(),
            prefix,
            line,
            pointer
        )
    }
}

/// Errors from reading the source under a cursor
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unexpected end of input at offset {offset}")]
    EndOfInput { offset: usize },
    #[error("invalid UTF-8 sequence at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

/// Errors from parsing a file
///
/// Distinguishes a file that could not be opened from one that could not be
/// parsed.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to parse: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new("unable to match ;", 7);
        assert_eq!(error.to_string(), "unable to match ; (at offset 7)");
        assert_eq!(error.message(), "unable to match ;");
        assert_eq!(error.offset(), 7);
    }

    #[test]
    fn test_failure_rewind_keeps_error() {
        let cursor = Cursor::from_text("abcdef");
        let (_, later) = cursor.with_result((), 4);

        let failure = later.with_error("broken").rewind(cursor);
        assert_eq!(failure.offset(), 0);
        assert_eq!(failure.error().offset(), 4);
        assert_eq!(failure.message(), "broken");
    }

    #[test]
    fn test_failure_with_message() {
        let cursor = Cursor::from_text("abc");
        let (_, later) = cursor.with_result((), 2);

        let failure = later.with_error("first").with_message("second");
        assert_eq!(failure.message(), "second");
        assert_eq!(failure.error().offset(), 2);
        assert_eq!(failure.offset(), 2);
    }

    #[test]
    fn test_failure_display_matches_error() {
        let failure = Cursor::from_text("x").with_error("expected y");
        assert_eq!(failure.to_string(), "expected y (at offset 0)");
        assert_eq!(failure.into_error(), ParseError::new("expected y", 0));
    }

    #[test]
    fn test_render_points_at_error() {
        let text = "select name\nfrom table";
        let cursor = Cursor::from_text(text);
        let (_, at) = cursor.with_result((), 17);

        let rendered = at.with_error("expected ';'").render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error at line 2, column 6: expected ';'");
        assert_eq!(lines[1], "  > 2 | from table");
        assert_eq!(lines[2], "             ^--- here");
    }

    #[test]
    fn test_render_at_end_of_input() {
        let text = "ab";
        let (_, at) = Cursor::from_text(text).with_result((), 2);
        let rendered = at.with_error("expected more").render();
        assert!(rendered.starts_with("error at line 1, column 3: expected more"));
        assert!(rendered.contains("  > 1 | ab"));
    }

    #[test]
    fn test_file_error_display() {
        let error = FileError::Open {
            path: PathBuf::from("/no/such/file"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "unable to open /no/such/file: not found");

        let error = FileError::from(ParseError::new("bad", 3));
        assert_eq!(error.to_string(), "unable to parse: bad (at offset 3)");
    }
}
