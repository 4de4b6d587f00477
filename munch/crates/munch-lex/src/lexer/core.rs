//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::Token;

use super::extract::extract;

/// Lexer over a complete input buffer.
///
/// Produces tokens one at a time with absolute spans. Whitespace is skipped
/// silently. Unrecognized input is reported with a [`TokenKind::Invalid`]
/// sentinel and the lexer does not move past it on its own; call
/// [`Lexer::skip_invalid`] to step over the offending byte.
///
/// [`TokenKind::Invalid`]: crate::TokenKind::Invalid
///
/// # Example
///
/// ```
/// use munch_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("(x + 1.5)");
/// let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Parenthesis,
///         TokenKind::Word,
///         TokenKind::Operator,
///         TokenKind::Float,
///         TokenKind::Parenthesis,
///     ]
/// );
/// assert!(lexer.is_at_end());
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor for input traversal.
    cursor: Cursor<'a>,

    /// Set once the iterator has yielded an `Invalid` sentinel.
    stalled: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            cursor: Cursor::new(source.as_ref()),
            stalled: false,
        }
    }

    /// Returns the next token.
    ///
    /// Returns a [`TokenKind::Eof`](crate::TokenKind::Eof) sentinel once the
    /// input is exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token<'a> {
        extract(&mut self.cursor)
    }

    /// Steps over the byte an `Invalid` sentinel stopped at.
    ///
    /// Returns the skipped byte, or `None` at the end of input.
    pub fn skip_invalid(&mut self) -> Option<u8> {
        let byte = self.cursor.current_byte()?;
        self.cursor.advance_by(1);
        self.stalled = false;
        Some(byte)
    }

    /// Scans the rest of the input into a vector.
    ///
    /// Stops at the first unrecognized byte and reports it as an error; the
    /// lexer is left in front of that byte.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnrecognizedCharacter`] on input that does not
    /// begin a token.
    pub fn tokenize(&mut self) -> ScanResult<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.is_eof() {
                return Ok(tokens);
            }
            if token.is_invalid() {
                return Err(self.unrecognized(token));
            }
            tokens.push(token);
        }
    }

    fn unrecognized(&self, token: Token<'a>) -> ScanError {
        ScanError::UnrecognizedCharacter {
            byte: self.cursor.current_byte().unwrap_or_default(),
            span: token.span,
        }
    }

    /// Returns the input not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.remaining()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stalled {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            return None;
        }
        if token.is_invalid() {
            self.stalled = true;
        }
        Some(token)
    }
}

/// Tokenizes all of `source`.
///
/// # Errors
///
/// Returns [`ScanError::UnrecognizedCharacter`] for the first byte that does
/// not begin a token.
///
/// # Example
///
/// ```
/// let tokens = munch_lex::tokenize("a*(b - 0.25)").unwrap();
/// let text: Vec<_> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(text, ["a", "*", "(", "b", "-", "0.25", ")"]);
///
/// let err = munch_lex::tokenize("a # b").unwrap_err();
/// assert_eq!(err.span().start, 2);
/// ```
pub fn tokenize<S>(source: &S) -> ScanResult<Vec<Token<'_>>>
where
    S: AsRef<[u8]> + ?Sized,
{
    Lexer::new(source).tokenize()
}
