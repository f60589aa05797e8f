//! # seekcomb - Backtracking Parser Combinators
//!
//! A parser combinator library that reads its input by absolute offset from a
//! random-access source: an in-memory string or buffer, a file, or anything
//! implementing [`Source`].
//!
//! Parsers are composable values. Small matchers for runes and literals are
//! combined with sequencing, choice, repetition, mapping and lookahead into
//! grammars. The library emphasizes:
//!
//! - **Cheap backtracking**: a [`Cursor`] is a `Copy` offset into the source, so
//!   retrying an alternative is resuming from an earlier cursor
//! - **Scannerless parsing**: grammars work directly on characters, with no
//!   separate tokenizer
//! - **Reusable parsers**: parsers hold no mutable state and can be shared
//!   between threads
//! - **No panics**: every failure is a [`Failure`] value
//!
//! ```
//! use seekcomb::parse_text;
//! use seekcomb::prelude::*;
//!
//! let column = match_letters();
//! let query = sequence_of((
//!     match_literal_insensitive("select"),
//!     &IGNORE_WHITESPACE1,
//!     column,
//!     &IGNORE_WHITESPACE,
//!     match_literal(";"),
//! ))
//! .map(|(_, _, column, _, _)| column);
//!
//! let outcome = parse_text(&query, "SELECT name ;");
//! assert_eq!(outcome.into_result().unwrap(), "name");
//! ```

pub mod anchor;
pub mod between;
pub mod chain;
pub mod choice;
pub mod cursor;
pub mod discard;
pub mod entry;
pub mod error;
pub mod lazy;
pub mod many;
pub mod map;
pub mod map_error;
pub mod optional;
pub mod parser;
pub mod peek;
pub mod repeat;
pub mod sequence;
pub mod source;
pub mod until;
pub mod utf8;

pub use cursor::{Cursor, LineColumn};
pub use entry::{Outcome, parse_bytes, parse_file, parse_source, parse_text};
pub use error::{Failure, FileError, ParseError, ReadError};
pub use parser::{BoxedExt, BoxedParser, Parsed, Parser, from_fn};
pub use source::{FileSource, Source};

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::anchor::{end_of_input, start_of_input, start_of_line};
    pub use crate::between::between;
    pub use crate::chain::{ChainExt, chain};
    pub use crate::choice::{OrExt, choice_of};
    pub use crate::discard::{DiscardExt, discard};
    pub use crate::lazy::lazy;
    pub use crate::many::{many, many1};
    pub use crate::map::{MapExt, map, map_indexed};
    pub use crate::map_error::{MapErrorExt, map_error};
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::parser::{BoxedExt, BoxedParser, Parser, from_fn};
    pub use crate::peek::peek;
    pub use crate::repeat::{exactly_n, up_to_n};
    pub use crate::sequence::{AndExt, sequence_of, sequence_of_no_nil};
    pub use crate::until::{until, until_string};
    pub use crate::utf8::{
        IGNORE_WHITESPACE, IGNORE_WHITESPACE1, any_rune, match_digit, match_letter, match_letters,
        match_literal, match_literal_insensitive, match_rune, match_rune_n, match_runes,
        match_space,
    };
    pub use crate::Cursor;
}
