//! Matchers for UTF-8 encoded text

pub mod digit;
pub mod letter;
pub mod rune;
pub mod space;
pub mod string;

pub use digit::match_digit;
pub use letter::{match_letter, match_letters};
pub use rune::{ClassMatcher, MatchRune, any_rune, match_rune, match_rune_n, match_runes};
pub use space::{IGNORE_WHITESPACE, IGNORE_WHITESPACE1, match_space};
pub use string::{match_literal, match_literal_insensitive};
