use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that makes the given parser optional
///
/// Yields `Some` on success. On failure yields `None` with the cursor left
/// where it was.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}
