use crate::utf8::rune::{ClassMatcher, MatchRune};
use std::borrow::Cow;

/// Match one Unicode numeric character
pub const fn match_digit() -> ClassMatcher {
    MatchRune {
        predicate: char::is_numeric,
        message: Cow::Borrowed("unable to match digit"),
    }
}
