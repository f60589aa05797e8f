//! Zero-width assertions about where the cursor is
//!
//! None of these consume input; on success they yield `()` with the cursor
//! unchanged.

use crate::cursor::Cursor;
use crate::parser::{Parsed, Parser};
use log::trace;

/// Succeeds only at offset zero
#[derive(Debug, Clone, Copy, Default)]
pub struct StartOfInput;

impl<'src> Parser<'src> for StartOfInput {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        if cursor.offset() != 0 {
            return Err(cursor.with_error("expected start of input"));
        }
        Ok(((), cursor))
    }
}

pub fn start_of_input() -> StartOfInput {
    StartOfInput
}

/// Succeeds only when no bytes remain
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl<'src> Parser<'src> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        match cursor.read_at(cursor.offset(), 1) {
            Ok(rest) if rest.is_empty() => Ok(((), cursor)),
            _ => Err(cursor.with_error("expected end of input")),
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

/// Succeeds at offset zero or directly after a `\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct StartOfLine;

impl<'src> Parser<'src> for StartOfLine {
    type Output = ();

    fn parse(&self, cursor: Cursor<'src>) -> Parsed<'src, Self::Output> {
        let offset = cursor.offset();
        if offset == 0 {
            return Ok(((), cursor));
        }

        let previous = cursor.read_at(offset - 1, 1);
        trace!("start of line probe before offset {}: {:?}", offset, previous);
        match previous {
            Ok(byte) if byte.first() == Some(&b'\n') => Ok(((), cursor)),
            _ => Err(cursor.with_error("expected start of line")),
        }
    }
}

pub fn start_of_line() -> StartOfLine {
    StartOfLine
}
