use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that picks the next parser based on the result of the first
///
/// The continuation is called with the first parser's output and the parser it
/// returns runs from where the first one stopped. Failures of either parser are
/// returned unchanged.
pub struct Chain<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Chain {
            parser,
            continuation,
        }
    }
}

impl<'src, P, F, Q> Parser<'src> for Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'src, P, F, Q>(parser: P, continuation: F) -> Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src>,
{
    Chain::new(parser, continuation)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'src>: Parser<'src> + Sized {
    fn chain<F, Q>(self, continuation: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'src>,
    {
        Chain::new(self, continuation)
    }
}

impl<'src, P> ChainExt<'src> for P where P: Parser<'src> {}
