use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Lookahead that checks whether the given parser would match
///
/// Never consumes input: on success yields `()` with the cursor exactly as
/// given, on failure fails with `would not match` at that cursor.
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<'src, P> Parser<'src> for Peek<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Ok(((), cursor)),
            Err(_) => Err(cursor.with_error("would not match")),
        }
    }
}

/// Convenience function to create a Peek parser
pub fn peek<'src, P>(parser: P) -> Peek<P>
where
    P: Parser<'src>,
{
    Peek::new(parser)
}
