use crate::cursor::Cursor;
use crate::map::Map;
use crate::parser::{Parsed, Parser};
use log::trace;

/// Parser combinator that repeats `body` until `stop` would match
///
/// Before every iteration `stop` is tried as lookahead. Once it matches, the
/// collected body results are returned with the cursor just before the stop
/// marker, leaving the marker for the next parser. If `body` fails first, the
/// failure from the most recent `stop` attempt is returned.
///
/// ```
/// use seekcomb::{Cursor, Parser};
/// use seekcomb::until::until;
/// use seekcomb::utf8::{any_rune, match_literal};
///
/// let parser = until(match_literal(";"), any_rune());
/// let (runes, cursor) = parser.parse(Cursor::from_text("ab;")).unwrap();
/// assert_eq!(runes, vec!['a', 'b']);
/// assert_eq!(cursor.offset(), 2);
/// ```
pub struct Until<S, B> {
    stop: S,
    body: B,
}

impl<S, B> Until<S, B> {
    pub fn new(stop: S, body: B) -> Self {
        Until { stop, body }
    }
}

impl<'src, S, B> Parser<'src> for Until<S, B>
where
    S: Parser<'src>,
    B: Parser<'src>,
{
    type Output = Vec<B::Output>;

    fn parse(&self, mut cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::new();

        loop {
            let stop_failure = match self.stop.parse(cursor) {
                Ok(_) => {
                    trace!("until stopped at offset {}", cursor.offset());
                    return Ok((results, cursor));
                }
                Err(failure) => failure,
            };

            match self.body.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => return Err(stop_failure),
            }
        }
    }
}

/// Convenience function to create an Until parser
pub fn until<'src, S, B>(stop: S, body: B) -> Until<S, B>
where
    S: Parser<'src>,
    B: Parser<'src>,
{
    Until::new(stop, body)
}

fn collect_string(runes: Vec<char>) -> String {
    runes.into_iter().collect()
}

/// [`until`] over a character parser, collecting the characters into a `String`
pub fn until_string<'src, S, B>(stop: S, body: B) -> Map<Until<S, B>, fn(Vec<char>) -> String>
where
    S: Parser<'src>,
    B: Parser<'src, Output = char>,
{
    Map::new(Until::new(stop, body), collect_string as fn(Vec<char>) -> String)
}
