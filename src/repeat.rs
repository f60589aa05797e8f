use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that applies the given parser exactly `count` times
pub struct ExactlyN<P> {
    count: usize,
    parser: P,
}

impl<P> ExactlyN<P> {
    pub fn new(count: usize, parser: P) -> Self {
        ExactlyN { count, parser }
    }
}

impl<'src, P> Parser<'src> for ExactlyN<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::with_capacity(self.count);
        let mut cursor = entry;

        for _ in 0..self.count {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(_) => {
                    return Err(entry.with_error(format!("failed to match {} times", self.count)));
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Match `parser` exactly `count` times in a row
pub fn exactly_n<'src, P>(count: usize, parser: P) -> ExactlyN<P>
where
    P: Parser<'src>,
{
    ExactlyN::new(count, parser)
}

/// Parser combinator that applies the given parser between one and `limit` times
///
/// Stops early at the first failing attempt. If not even the first attempt
/// matches, that attempt's failure is returned. A limit of zero matches
/// nothing and always succeeds with an empty `Vec`.
pub struct UpToN<P> {
    limit: usize,
    parser: P,
}

impl<P> UpToN<P> {
    pub fn new(limit: usize, parser: P) -> Self {
        UpToN { limit, parser }
    }
}

impl<'src, P> Parser<'src> for UpToN<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::new();

        for _ in 0..self.limit {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    results.push(value);
                    cursor = next;
                }
                Err(failure) if results.is_empty() => return Err(failure),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Match `parser` at least once and at most `limit` times
pub fn up_to_n<'src, P>(limit: usize, parser: P) -> UpToN<P>
where
    P: Parser<'src>,
{
    UpToN::new(limit, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::{match_digit, match_literal};
    use rstest::rstest;

    #[test]
    fn test_exactly_n_matches() {
        let cursor = Cursor::from_text("12345");
        let (digits, cursor) = exactly_n(3, match_digit()).parse(cursor).unwrap();
        assert_eq!(digits, vec!['1', '2', '3']);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_exactly_n_too_few() {
        let cursor = Cursor::from_text("x12a").moved_to(1);
        let failure = exactly_n(3, match_digit()).parse(cursor).unwrap_err();
        assert_eq!(failure.message(), "failed to match 3 times");
        assert_eq!(failure.offset(), 1);
    }

    #[test]
    fn test_exactly_zero() {
        let cursor = Cursor::from_text("abc");
        let (digits, cursor) = exactly_n(0, match_digit()).parse(cursor).unwrap();
        assert!(digits.is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[rstest]
    #[case("§ title", 1, 2)]
    #[case("§§§ title", 3, 6)]
    #[case("§§§§§§ title", 6, 12)]
    #[case("§§§§§§§ title", 6, 12)]
    fn test_up_to_n(#[case] input: &str, #[case] count: usize, #[case] offset: usize) {
        let cursor = Cursor::from_text(input);
        let (marks, cursor) = up_to_n(6, match_literal("§")).parse(cursor).unwrap();
        assert_eq!(marks.len(), count);
        assert_eq!(cursor.offset(), offset);
    }

    #[test]
    fn test_up_to_n_none_matched() {
        let cursor = Cursor::from_text("title");
        let failure = up_to_n(6, match_literal("§")).parse(cursor).unwrap_err();
        assert_eq!(failure.message(), "unable to match §");
        assert_eq!(failure.offset(), 0);
    }

    #[test]
    fn test_up_to_zero_reads_nothing() {
        let cursor = Cursor::from_text("§");
        let (marks, cursor) = up_to_n(0, match_literal("§")).parse(cursor).unwrap();
        assert!(marks.is_empty());
        assert_eq!(cursor.offset(), 0);
    }
}
