use crate::cursor::Cursor;
use crate::error::Failure;

/// Result of running a parser: the output and the advanced cursor, or a failure
pub type Parsed<'src, T> = Result<(T, Cursor<'src>), Failure<'src>>;

/// Core parser trait for parser combinators
///
/// A parser is a pure mapping from a cursor to a new cursor. Implementations hold
/// only configuration captured at construction, so the same parser value can be
/// reused across parses, including from several threads at once.
///
/// Implementors must never report success with a cursor before the one they were
/// given. On failure they return a [`Failure`] whose cursor is still usable for
/// diagnostics.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output>;
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A parser with its concrete type erased
pub type BoxedParser<'src, T> = Box<dyn Parser<'src, Output = T> + Send + Sync + 'src>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'src>: Parser<'src> + Sized + Send + Sync + 'src {
    fn boxed(self) -> BoxedParser<'src, Self::Output> {
        Box::new(self)
    }
}

impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> + Send + Sync + 'src {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<'src, F, T> Parser<'src> for FromFn<F>
where
    F: Fn(Cursor<'src>) -> Parsed<'src, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        (self.function)(cursor)
    }
}

/// Turn a function into a parser
///
/// This is how custom matchers are plugged into the combinators:
///
/// ```
/// use seekcomb::{Cursor, Parser, from_fn};
///
/// let hash = from_fn(|cursor| match cursor.read_bytes(1) {
///     Ok(bytes) if bytes[0] == b'#' => Ok(cursor.with_result('#', cursor.offset() + 1)),
///     _ => Err(cursor.with_error("expected '#'")),
/// });
///
/// let (ch, cursor) = hash.parse(Cursor::from_text("#1")).unwrap();
/// assert_eq!(ch, '#');
/// assert_eq!(cursor.offset(), 1);
/// ```
pub fn from_fn<F, T>(function: F) -> FromFn<F>
where
    F: Fn(Cursor<'_>) -> Parsed<'_, T>,
{
    FromFn { function }
}
