use crate::map::MapExt;
use crate::parser::Parser;
use crate::utf8::rune::{ClassMatcher, MatchRune, match_runes};
use std::borrow::Cow;

/// Match one Unicode alphabetic character
pub const fn match_letter() -> ClassMatcher {
    MatchRune {
        predicate: char::is_alphabetic,
        message: Cow::Borrowed("unable to match letter"),
    }
}

/// Match a run of one or more letters, collected into a `String`
pub fn match_letters() -> impl for<'src> Parser<'src, Output = String> {
    match_runes(char::is_alphabetic, "unable to match letters")
        .map(|runes: Vec<char>| runes.into_iter().collect::<String>())
}
