use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. A failure in any of the three parts is anchored at
/// the cursor before the opening delimiter.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<L, C, R> {
    open: L,
    content: C,
    close: R,
}

impl<L, C, R> Between<L, C, R> {
    pub fn new(open: L, content: C, close: R) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, L, C, R> Parser<'src> for Between<L, C, R>
where
    L: Parser<'src>,
    C: Parser<'src>,
    R: Parser<'src>,
{
    type Output = C::Output;

    fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let rewind = |failure: Failure<'src>| failure.rewind(entry);

        let (_, cursor) = self.open.parse(entry).map_err(rewind)?;
        let (value, cursor) = self.content.parse(cursor).map_err(rewind)?;
        let (_, cursor) = self.close.parse(cursor).map_err(rewind)?;

        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'src, L, C, R>(open: L, content: C, close: R) -> Between<L, C, R>
where
    L: Parser<'src>,
    C: Parser<'src>,
    R: Parser<'src>,
{
    Between::new(open, content, close)
}
