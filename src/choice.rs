use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};
use log::trace;

/// Parser combinator that tries alternatives in order and takes the first success
///
/// Every alternative starts from the same cursor. When all of them fail the
/// choice fails at that cursor with `did not match any choice`; the individual
/// errors of the alternatives are not kept.
pub struct ChoiceOf<Ps> {
    parsers: Ps,
}

impl<Ps> ChoiceOf<Ps> {
    pub fn new(parsers: Ps) -> Self {
        ChoiceOf { parsers }
    }
}

/// Convenience function to create a ChoiceOf parser
pub fn choice_of<Ps>(parsers: Ps) -> ChoiceOf<Ps> {
    ChoiceOf::new(parsers)
}

fn exhausted<T>(cursor: Cursor<'_>) -> Parsed<'_, T> {
    trace!("no choice matched at offset {}", cursor.offset());
    Err(cursor.with_error("did not match any choice"))
}

macro_rules! choice_of_tuple {
    ($first:ident $(, $rest:ident $idx:tt)*) => {
        impl<'src, $first, $($rest),*> Parser<'src> for ChoiceOf<($first, $($rest,)*)>
        where
            $first: Parser<'src>,
            $($rest: Parser<'src, Output = $first::Output>,)*
        {
            type Output = $first::Output;

            fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
                if let Ok(success) = self.parsers.0.parse(cursor) {
                    return Ok(success);
                }
                $(
                    if let Ok(success) = self.parsers.$idx.parse(cursor) {
                        return Ok(success);
                    }
                )*
                exhausted(cursor)
            }
        }
    };
}

choice_of_tuple!(A);
choice_of_tuple!(A, B 1);
choice_of_tuple!(A, B 1, C 2);
choice_of_tuple!(A, B 1, C 2, D 3);
choice_of_tuple!(A, B 1, C 2, D 3, E 4);
choice_of_tuple!(A, B 1, C 2, D 3, E 4, F 5);
choice_of_tuple!(A, B 1, C 2, D 3, E 4, F 5, G 6);
choice_of_tuple!(A, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<'src, P> Parser<'src> for ChoiceOf<Vec<P>>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        for parser in &self.parsers {
            if let Ok(success) = parser.parse(cursor) {
                return Ok(success);
            }
        }
        exhausted(cursor)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> ChoiceOf<(Self, P)>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        ChoiceOf::new((self, other))
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}
