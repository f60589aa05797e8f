use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The first failing attempt ends the repetition and is
/// discarded. The wrapped parser must consume input on success, otherwise the
/// repetition does not terminate.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub const fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::new();

        while let Ok((value, next)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub const fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'src, P> Parser<'src> for Many1<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = entry;

        while let Ok((value, next)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next;
        }

        if results.is_empty() {
            return Err(entry.with_error("failed to match at least once"));
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'src, P>(parser: P) -> Many1<P>
where
    P: Parser<'src>,
{
    Many1::new(parser)
}
