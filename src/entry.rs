//! Running a parser once over a whole input

use crate::cursor::Cursor;
use crate::error::{FileError, ParseError};
use crate::parser::Parser;
use crate::source::{FileSource, Source};
use log::debug;
use std::path::Path;

/// The final state of a parse
///
/// Holds the offset the parse ended at and either the parser's output or the
/// error. For a failure the offset is where the failing parser was anchored,
/// which after a failed sequence is the start of that sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    offset: usize,
    result: Result<T, ParseError>,
}

impl<T> Outcome<T> {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    pub fn result(&self) -> Result<&T, &ParseError> {
        self.result.as_ref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.result.as_ref().err()
    }

    pub fn into_result(self) -> Result<T, ParseError> {
        self.result
    }
}

fn run<'src, P>(parser: &P, cursor: Cursor<'src>) -> Outcome<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    let outcome = match parser.parse(cursor) {
        Ok((result, cursor)) => Outcome {
            offset: cursor.offset(),
            result: Ok(result),
        },
        Err(failure) => Outcome {
            offset: failure.offset(),
            result: Err(failure.into_error()),
        },
    };

    match &outcome.result {
        Ok(_) => debug!("parse succeeded at offset {}", outcome.offset),
        Err(error) => debug!("parse failed at offset {}: {}", outcome.offset, error),
    }
    outcome
}

/// Parse an in-memory string from its start
pub fn parse_text<'src, P>(parser: &P, text: &'src str) -> Outcome<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    debug!("parsing {} bytes of text", text.len());
    run(parser, Cursor::from_text(text))
}

/// Parse an in-memory byte buffer from its start
pub fn parse_bytes<'src, P>(parser: &P, data: &'src [u8]) -> Outcome<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    debug!("parsing {} bytes", data.len());
    run(parser, Cursor::from_bytes(data))
}

/// Parse a custom source from its start
pub fn parse_source<'src, P>(parser: &P, source: &'src dyn Source) -> Outcome<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    debug!("parsing custom source");
    run(parser, Cursor::new(source))
}

/// Open a file and parse it from its start
///
/// The file is read by position as the parser asks for bytes and is closed
/// before this function returns. A file that cannot be opened is an `Err`;
/// a file that does not parse is an `Ok` outcome holding the parse error. Use
/// [`Outcome::into_result`] with `?` to fold both into one [`FileError`]:
///
/// ```no_run
/// use seekcomb::{FileError, parse_file};
/// use seekcomb::utf8::match_letters;
///
/// fn first_word(path: &str) -> Result<String, FileError> {
///     Ok(parse_file(&match_letters(), path)?.into_result()?)
/// }
/// ```
pub fn parse_file<P, T>(parser: &P, path: impl AsRef<Path>) -> Result<Outcome<T>, FileError>
where
    P: for<'src> Parser<'src, Output = T> + ?Sized,
{
    let path = path.as_ref();
    let source = FileSource::open(path).map_err(|source| {
        debug!("unable to open {}: {}", path.display(), source);
        FileError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("parsing file {}", path.display());
    Ok(run(parser, Cursor::new(&source)))
}
