use crate::error::{Failure, ReadError};
use crate::source::Source;
use std::borrow::Cow;
use std::fmt;

/// Where a cursor reads its bytes from
#[derive(Clone, Copy)]
enum Input<'src> {
    Memory(&'src [u8]),
    Source(&'src dyn Source),
}

impl<'src> Input<'src> {
    fn read_at(self, offset: usize, len: usize) -> Result<Cow<'src, [u8]>, ReadError> {
        match self {
            Input::Memory(data) => {
                let start = offset.min(data.len());
                let end = offset.saturating_add(len).min(data.len());
                Ok(Cow::Borrowed(&data[start..end]))
            }
            Input::Source(source) => Ok(source.read_at(offset, len)?),
        }
    }
}

/// 1-based line and byte column of a position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    /// Byte offset within the line, starting at 1
    ///
    /// This is a byte count rather than a rendered column: multi-byte characters
    /// and tabs are not expanded.
    pub column: usize,
}

impl LineColumn {
    /// Position just after `prefix`, which must hold every source byte before it
    pub fn locate(prefix: &[u8]) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &byte) in prefix.iter().enumerate() {
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        LineColumn {
            line,
            column: prefix.len() - line_start + 1,
        }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An immutable position in a source
///
/// Cursors are `Copy`: advancing produces a new cursor and leaves every
/// previously held cursor valid. Backtracking is resuming from a cursor saved
/// before an attempt.
#[derive(Clone, Copy)]
pub struct Cursor<'src> {
    input: Input<'src>,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Cursor at the start of a custom source
    pub fn new(source: &'src dyn Source) -> Self {
        Cursor {
            input: Input::Source(source),
            offset: 0,
        }
    }

    /// Cursor at the start of an in-memory byte buffer
    pub fn from_bytes(data: &'src [u8]) -> Self {
        Cursor {
            input: Input::Memory(data),
            offset: 0,
        }
    }

    /// Cursor at the start of an in-memory string
    pub fn from_text(text: &'src str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Produce the result of a successful step, advancing to `offset`
    ///
    /// This is the only way parsers move forward. `offset` must not be smaller
    /// than the current offset.
    pub fn with_result<T>(self, result: T, offset: usize) -> (T, Self) {
        debug_assert!(
            offset >= self.offset,
            "cursor moved backwards from {} to {}",
            self.offset,
            offset
        );
        (result, self.moved_to(offset))
    }

    /// Fail at this cursor with the given message
    pub fn with_error(self, message: impl Into<Cow<'static, str>>) -> Failure<'src> {
        Failure::new(self, message)
    }

    pub(crate) fn moved_to(self, offset: usize) -> Self {
        Cursor { offset, ..self }
    }

    /// Read up to `len` bytes at `offset`, fewer only at the end of the source
    pub(crate) fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'src, [u8]>, ReadError> {
        self.input.read_at(offset, len)
    }

    /// Read exactly `n` bytes at the current offset
    pub fn read_bytes(&self, n: usize) -> Result<Cow<'src, [u8]>, ReadError> {
        let bytes = self.read_at(self.offset, n)?;
        if bytes.len() < n {
            return Err(ReadError::EndOfInput {
                offset: self.offset,
            });
        }
        Ok(bytes)
    }

    /// Decode one UTF-8 code point at the current offset
    ///
    /// Probes windows of 1, 2, 3 and 4 bytes until one decodes completely.
    /// Returns the character and its length in bytes.
    pub fn read_rune(&self) -> Result<(char, usize), ReadError> {
        for width in 1..=4 {
            let window = self.read_at(self.offset, width)?;
            if window.is_empty() {
                return Err(ReadError::EndOfInput {
                    offset: self.offset,
                });
            }
            if window.len() < width {
                // The source ends in the middle of a sequence
                break;
            }

            match std::str::from_utf8(&window) {
                Ok(text) => {
                    if let Some(ch) = text.chars().next() {
                        return Ok((ch, width));
                    }
                }
                Err(e) if e.error_len().is_none() => continue,
                Err(_) => break,
            }
        }

        Err(ReadError::InvalidUtf8 {
            offset: self.offset,
        })
    }

    /// Decode `n` consecutive code points starting at the current offset
    ///
    /// Returns the characters and their combined length in bytes.
    pub fn read_runes(&self, n: usize) -> Result<(Vec<char>, usize), ReadError> {
        let mut runes = Vec::with_capacity(n);
        let mut probe = *self;

        for _ in 0..n {
            let (ch, width) = probe.read_rune()?;
            runes.push(ch);
            probe = probe.moved_to(probe.offset + width);
        }

        Ok((runes, probe.offset - self.offset))
    }

    /// Line and column of the current offset
    ///
    /// Scans every byte from the start of the source, so the cost grows with the
    /// offset.
    pub fn line_offset(&self) -> Result<LineColumn, ReadError> {
        let prefix = self.read_at(0, self.offset)?;
        Ok(LineColumn::locate(&prefix))
    }

    /// The full text of the line containing the current offset, without its newline
    pub fn line_text(&self) -> Result<String, ReadError> {
        const CHUNK: usize = 128;

        let prefix = self.read_at(0, self.offset)?;
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let mut line = prefix[line_start..].to_vec();

        let mut at = self.offset;
        loop {
            let chunk = self.read_at(at, CHUNK)?;
            match chunk.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    line.extend_from_slice(&chunk[..end]);
                    break;
                }
                None => line.extend_from_slice(&chunk),
            }
            if chunk.len() < CHUNK {
                break;
            }
            at += chunk.len();
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
