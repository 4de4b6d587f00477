//! Token definitions.

use std::fmt;

use crate::span::Span;
use crate::state::State;

/// Category of a token.
///
/// `Eof` and `Invalid` are sentinels: they carry no text and mark the two
/// ways a scan can come up empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single operator symbol such as `+` or `=`.
    Operator,
    /// `(` or `)`.
    Parenthesis,
    /// The literal `0`.
    Zero,
    /// A decimal integer without a leading zero.
    Integer,
    /// A decimal number containing a `.`.
    Float,
    /// A run of ASCII letters and underscores.
    Word,
    /// No input left.
    Eof,
    /// The next byte does not begin any token.
    Invalid,
}

impl TokenKind {
    /// Maps an accepting scanner state to the category of token it produces.
    ///
    /// Returns `None` for `Whitespaces` (never emitted) and for the
    /// non-accepting states.
    pub fn from_state(state: State) -> Option<Self> {
        match state {
            State::Operators => Some(TokenKind::Operator),
            State::Parenthesis => Some(TokenKind::Parenthesis),
            State::Zero => Some(TokenKind::Zero),
            State::NonzeroDigits => Some(TokenKind::Integer),
            State::Floating => Some(TokenKind::Float),
            State::Word => Some(TokenKind::Word),
            State::Whitespaces | State::Start | State::Error => None,
        }
    }

    /// Returns `true` for `Eof` and `Invalid`.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Invalid)
    }

    /// Lowercase name used in diagnostics and tool output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Operator => "operator",
            TokenKind::Parenthesis => "parenthesis",
            TokenKind::Zero => "zero",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Word => "word",
            TokenKind::Eof => "eof",
            TokenKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token: a category plus a borrowed view of the bytes it was scanned from.
///
/// The token never copies input; the buffer must outlive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token category.
    pub kind: TokenKind,
    /// Location of `text` in the scanned input.
    pub span: Span,
    /// The matched bytes. Empty for sentinels.
    pub text: &'a [u8],
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span, text: &'a [u8]) -> Self {
        Self { kind, span, text }
    }

    /// Creates an end-of-input sentinel at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, span, &[])
    }

    /// Creates an unrecognized-character sentinel at `span`.
    pub fn invalid(span: Span) -> Self {
        Self::new(TokenKind::Invalid, span, &[])
    }

    /// Returns `true` if this is the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns `true` if this is the unrecognized-character sentinel.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    /// Length of the matched text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for sentinels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The matched text as a string slice.
    ///
    /// Every byte a token can match is ASCII, so this never loses data.
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.text).unwrap_or_default()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_sentinel() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.as_str())
        }
    }
}
