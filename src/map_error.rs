use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};
use std::borrow::Cow;

/// Parser combinator that rewrites the message of a failure
///
/// The rewrite function sees the whole failure, so it can inspect the cursor
/// (for example to quote the surrounding source). It must accept a failure over
/// any source, so the same grammar can run on text, buffers and files. The
/// failure keeps its cursor and the error keeps its detection offset. Successes
/// pass through untouched.
pub struct MapError<P, F> {
    parser: P,
    rewrite: F,
}

impl<P, F> MapError<P, F> {
    pub fn new(parser: P, rewrite: F) -> Self {
        MapError { parser, rewrite }
    }
}

impl<'src, P, F, M> Parser<'src> for MapError<P, F>
where
    P: Parser<'src>,
    F: Fn(&Failure<'src>) -> M,
    M: Into<Cow<'static, str>>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| {
            let message = (self.rewrite)(&failure);
            failure.with_message(message)
        })
    }
}

/// Convenience function to create a MapError parser
pub fn map_error<'src, P, F, M>(parser: P, rewrite: F) -> MapError<P, F>
where
    P: Parser<'src>,
    F: Fn(&Failure<'_>) -> M,
    M: Into<Cow<'static, str>>,
{
    MapError::new(parser, rewrite)
}

/// Extension trait to add .map_error() method support for parsers
pub trait MapErrorExt<'src>: Parser<'src> + Sized {
    fn map_error<F, M>(self, rewrite: F) -> MapError<Self, F>
    where
        F: Fn(&Failure<'_>) -> M,
        M: Into<Cow<'static, str>>,
    {
        MapError::new(self, rewrite)
    }
}

impl<'src, P> MapErrorExt<'src> for P where P: Parser<'src> {}
