use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};
use std::marker::PhantomData;

/// Parser combinator that runs parsers one after another and collects every result
///
/// `Ps` is either a tuple of up to eight parsers, producing a tuple of their
/// outputs, or a `Vec` of parsers of one type, producing a `Vec` of outputs.
///
/// If any step fails the whole sequence fails with that step's error, and the
/// failure is re-anchored at the cursor the sequence started from so an
/// enclosing choice retries from there.
///
/// ```
/// use seekcomb::{Cursor, Parser};
/// use seekcomb::sequence::sequence_of;
/// use seekcomb::utf8::{match_digit, match_literal};
///
/// let parser = sequence_of((match_literal("v"), match_digit()));
/// let ((v, digit), cursor) = parser.parse(Cursor::from_text("v2")).unwrap();
/// assert_eq!((v.as_ref(), digit), ("v", '2'));
/// assert_eq!(cursor.offset(), 2);
/// ```
pub struct SequenceOf<Ps> {
    parsers: Ps,
}

impl<Ps> SequenceOf<Ps> {
    pub fn new(parsers: Ps) -> Self {
        SequenceOf { parsers }
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of<Ps>(parsers: Ps) -> SequenceOf<Ps> {
    SequenceOf::new(parsers)
}

macro_rules! sequence_of_tuple {
    ($($step:ident $value:ident $idx:tt),+) => {
        impl<'src, $($step),+> Parser<'src> for SequenceOf<($($step,)+)>
        where
            $($step: Parser<'src>,)+
        {
            type Output = ($($step::Output,)+);

            fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
                let cursor = entry;
                $(
                    let ($value, cursor) = self.parsers.$idx
                        .parse(cursor)
                        .map_err(|failure| failure.rewind(entry))?;
                )+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

sequence_of_tuple!(A a 0);
sequence_of_tuple!(A a 0, B b 1);
sequence_of_tuple!(A a 0, B b 1, C c 2);
sequence_of_tuple!(A a 0, B b 1, C c 2, D d 3);
sequence_of_tuple!(A a 0, B b 1, C c 2, D d 3, E e 4);
sequence_of_tuple!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
sequence_of_tuple!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
sequence_of_tuple!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);

impl<'src, P> Parser<'src> for SequenceOf<Vec<P>>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut cursor = entry;

        for parser in &self.parsers {
            let (value, next) = parser
                .parse(cursor)
                .map_err(|failure| failure.rewind(entry))?;
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> SequenceOf<(Self, P)>
    where
        P: Parser<'src>,
    {
        SequenceOf::new((self, other))
    }
}

impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}

/// A step output that may or may not carry a value worth keeping
///
/// `()` never does. `Option<T>` does when it is `Some`.
pub trait Kept<T> {
    fn kept(self) -> Option<T>;
}

impl<T> Kept<T> for () {
    fn kept(self) -> Option<T> {
        None
    }
}

impl<T> Kept<T> for Option<T> {
    fn kept(self) -> Option<T> {
        self
    }
}

/// Sequence that keeps only the meaningful step results
///
/// Every step must yield `()` or `Option<T>`. Unit results and `None` are
/// dropped; `Some` values are collected in order. Wrap a step in `.map(Some)`
/// to keep a plain value.
pub struct SequenceOfNoNil<Ps, T> {
    parsers: Ps,
    _kept: PhantomData<fn() -> T>,
}

impl<Ps, T> SequenceOfNoNil<Ps, T> {
    pub fn new(parsers: Ps) -> Self {
        SequenceOfNoNil {
            parsers,
            _kept: PhantomData,
        }
    }
}

/// Convenience function to create a SequenceOfNoNil parser
pub fn sequence_of_no_nil<Ps, T>(parsers: Ps) -> SequenceOfNoNil<Ps, T> {
    SequenceOfNoNil::new(parsers)
}

macro_rules! sequence_of_no_nil_tuple {
    ($($step:ident $idx:tt),+) => {
        impl<'src, T, $($step),+> Parser<'src> for SequenceOfNoNil<($($step,)+), T>
        where
            $($step: Parser<'src>, $step::Output: Kept<T>,)+
        {
            type Output = Vec<T>;

            fn parse(&self, entry: Cursor<'src>) -> Parsed<'src, Self::Output> {
                let mut results = Vec::new();
                let cursor = entry;
                $(
                    let (value, cursor) = self.parsers.$idx
                        .parse(cursor)
                        .map_err(|failure| failure.rewind(entry))?;
                    results.extend(value.kept());
                )+
                Ok((results, cursor))
            }
        }
    };
}

sequence_of_no_nil_tuple!(A 0);
sequence_of_no_nil_tuple!(A 0, B 1);
sequence_of_no_nil_tuple!(A 0, B 1, C 2);
sequence_of_no_nil_tuple!(A 0, B 1, C 2, D 3);
sequence_of_no_nil_tuple!(A 0, B 1, C 2, D 3, E 4);
sequence_of_no_nil_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
sequence_of_no_nil_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
sequence_of_no_nil_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
