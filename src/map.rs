use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Like [`Map`], but the mapping function also receives the offset the match started at
pub struct MapIndexed<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapIndexed<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapIndexed { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for MapIndexed<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T, usize) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let start = cursor.offset();
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value, start), cursor))
    }
}

/// Convenience function to create a MapIndexed parser
pub fn map_indexed<'src, P, F, T, U>(parser: P, mapper: F) -> MapIndexed<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T, usize) -> U,
{
    MapIndexed::new(parser, mapper)
}

/// Extension trait to add .map() and .map_indexed() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn map_indexed<F, U>(self, mapper: F) -> MapIndexed<Self, F>
    where
        F: Fn(Self::Output, usize) -> U,
    {
        MapIndexed::new(self, mapper)
    }
}

impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}
