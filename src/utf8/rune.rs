use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};
use std::borrow::Cow;

/// A rune matcher driven by a plain character-class function
pub type ClassMatcher = MatchRune<fn(char) -> bool>;

/// Parser that consumes a single UTF-8 character satisfying a predicate
pub struct MatchRune<F> {
    pub(crate) predicate: F,
    pub(crate) message: Cow<'static, str>,
}

impl<'src, F> Parser<'src> for MatchRune<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        match cursor.read_rune() {
            Ok((ch, width)) if (self.predicate)(ch) => {
                Ok(cursor.with_result(ch, cursor.offset() + width))
            }
            _ => Err(cursor.with_error(self.message.clone())),
        }
    }
}

/// Match one character for which `predicate` holds, failing with `message` otherwise
///
/// The cursor does not move on failure, including at the end of input or on
/// invalid UTF-8.
pub fn match_rune<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> MatchRune<F>
where
    F: Fn(char) -> bool,
{
    MatchRune {
        predicate,
        message: message.into(),
    }
}

fn accept_any(_: char) -> bool {
    true
}

/// Match any single character
pub const fn any_rune() -> ClassMatcher {
    MatchRune {
        predicate: accept_any,
        message: Cow::Borrowed("unable to match rune"),
    }
}

/// Parser that greedily consumes one or more characters satisfying a predicate
pub struct MatchRunes<F> {
    predicate: F,
    message: Cow<'static, str>,
}

impl<'src, F> Parser<'src> for MatchRunes<F>
where
    F: Fn(char) -> bool,
{
    type Output = Vec<char>;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let mut runes = Vec::new();
        let mut probe = cursor;

        while let Ok((ch, width)) = probe.read_rune() {
            if !(self.predicate)(ch) {
                break;
            }
            runes.push(ch);
            probe = probe.moved_to(probe.offset() + width);
        }

        if runes.is_empty() {
            return Err(cursor.with_error(self.message.clone()));
        }
        Ok(cursor.with_result(runes, probe.offset()))
    }
}

/// Match one or more consecutive characters for which `predicate` holds
///
/// Zero matches is a failure. Wrap in [`optional`](crate::optional::optional)
/// to accept an empty run.
pub fn match_runes<F>(predicate: F, message: impl Into<Cow<'static, str>>) -> MatchRunes<F>
where
    F: Fn(char) -> bool,
{
    MatchRunes {
        predicate,
        message: message.into(),
    }
}

/// Parser that consumes exactly `n` characters of any kind
pub struct MatchRuneN {
    count: usize,
}

impl<'src> Parser<'src> for MatchRuneN {
    type Output = Vec<char>;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        match cursor.read_runes(self.count) {
            Ok((runes, len)) => Ok(cursor.with_result(runes, cursor.offset() + len)),
            Err(_) => Err(cursor.with_error(format!("unable to match {} runes", self.count))),
        }
    }
}

/// Match exactly `count` characters
pub fn match_rune_n(count: usize) -> MatchRuneN {
    MatchRuneN { count }
}
