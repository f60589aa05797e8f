use crate::discard::Discard;
use crate::many::{Many, Many1};
use crate::utf8::rune::{ClassMatcher, MatchRune};
use std::borrow::Cow;

/// Match one Unicode whitespace character
pub const fn match_space() -> ClassMatcher {
    MatchRune {
        predicate: char::is_whitespace,
        message: Cow::Borrowed("unable to match space"),
    }
}

/// Skips zero or more whitespace characters
pub static IGNORE_WHITESPACE: Discard<Many<ClassMatcher>> = Discard::new(Many::new(match_space()));

/// Skips one or more whitespace characters
pub static IGNORE_WHITESPACE1: Discard<Many1<ClassMatcher>> =
    Discard::new(Many1::new(match_space()));
