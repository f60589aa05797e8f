use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that consumes what the given parser matches and yields `()`
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub const fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<'src, P> Parser<'src> for Discard<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Convenience function to create a Discard parser
pub fn discard<'src, P>(parser: P) -> Discard<P>
where
    P: Parser<'src>,
{
    Discard::new(parser)
}

/// Extension trait to add .discard() method support for parsers
pub trait DiscardExt<'src>: Parser<'src> + Sized {
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }
}

impl<'src, P> DiscardExt<'src> for P where P: Parser<'src> {}
