use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string literal
pub struct MatchLiteral {
    text: Cow<'static, str>,
}

impl MatchLiteral {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        MatchLiteral { text: text.into() }
    }
}

impl<'src> Parser<'src> for MatchLiteral {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let len = self.text.len();
        match cursor.read_bytes(len) {
            Ok(window) if window.as_ref() == self.text.as_bytes() => {
                Ok(cursor.with_result(self.text.clone(), cursor.offset() + len))
            }
            _ => Err(cursor.with_error(format!("unable to match {}", self.text))),
        }
    }
}

/// Match `text` byte for byte, yielding the literal itself
///
/// The empty literal always succeeds without advancing.
pub fn match_literal(text: impl Into<Cow<'static, str>>) -> MatchLiteral {
    MatchLiteral::new(text)
}

/// Parser that matches a string literal ignoring case
///
/// Exactly as many bytes as the literal has are read and both sides are
/// compared after upper-casing. A source window whose case variant has a
/// different byte length than the literal never matches.
pub struct MatchLiteralInsensitive {
    text: Cow<'static, str>,
    upper: String,
}

impl MatchLiteralInsensitive {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        let text = text.into();
        let upper = text.to_uppercase();
        MatchLiteralInsensitive { text, upper }
    }

    fn matches(&self, window: &[u8]) -> bool {
        std::str::from_utf8(window).is_ok_and(|found| found.to_uppercase() == self.upper)
    }
}

impl<'src> Parser<'src> for MatchLiteralInsensitive {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let len = self.text.len();
        match cursor.read_bytes(len) {
            Ok(window) if self.matches(&window) => {
                Ok(cursor.with_result(self.text.clone(), cursor.offset() + len))
            }
            _ => Err(cursor.with_error(format!("unable to match {}", self.text))),
        }
    }
}

/// Match `text` regardless of case, yielding the literal as written in the grammar
pub fn match_literal_insensitive(text: impl Into<Cow<'static, str>>) -> MatchLiteralInsensitive {
    MatchLiteralInsensitive::new(text)
}
