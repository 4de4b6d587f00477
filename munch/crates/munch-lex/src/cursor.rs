//! Byte cursor for traversing scanner input.
//!
//! The cursor owns the scan position and keeps line/column information up to
//! date as bytes are consumed, so tokens can carry a [`Span`] without a second
//! pass over the input.

use crate::span::Span;

/// A cursor over a borrowed byte buffer.
///
/// # Example
///
/// ```
/// use munch_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"ab\ncd");
/// cursor.advance_by(3);
/// assert_eq!(cursor.position(), 3);
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The input being traversed.
    source: &'a [u8],

    /// Current byte offset.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the whole input.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte under the cursor, if any.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Returns the unconsumed tail of the input.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position.min(self.source.len())..]
    }

    /// Returns the bytes between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns an empty span at the current position.
    #[inline]
    pub fn here(&self) -> Span {
        Span::new(self.position, self.position, self.line, self.column)
    }

    /// Advances past the next `count` bytes, clamped to the end of input.
    pub fn advance_by(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        for &b in &self.source[self.position..end] {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position = end;
    }

    /// Advances the cursor to `offset`. Offsets behind the cursor are ignored.
    #[inline]
    pub fn advance_to(&mut self, offset: usize) {
        if offset > self.position {
            self.advance_by(offset - self.position);
        }
    }
}
