//! Token extraction.
//!
//! Runs the maximal-munch scanner at the cursor, steps over whitespace runs,
//! and turns the first non-whitespace match into a [`Token`].

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::fsm::longest_match;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Extracts one token at the cursor and advances past it.
///
/// Whitespace before the token is consumed. When no token is available the
/// cursor stops in front of the offending byte (or at the end of input) and a
/// sentinel is returned.
pub(crate) fn extract<'a>(cursor: &mut Cursor<'a>) -> Token<'a> {
    loop {
        let start = cursor.position();
        let here = cursor.here();

        let Some(m) = longest_match(cursor.source(), start) else {
            if cursor.is_at_end() {
                debug!(offset = start, "end of input");
                return Token::eof(here);
            }
            debug!(offset = start, byte = ?cursor.current_byte(), "unrecognized character");
            return Token::invalid(here);
        };

        cursor.advance_to(m.end);

        match TokenKind::from_state(m.state) {
            Some(kind) => {
                let span = Span::new(start, m.end, here.line, here.column);
                debug!(%kind, start, end = m.end, "token");
                return Token::new(kind, span, cursor.slice_from(start));
            },
            None => trace!(start, len = m.len(start), "skipped whitespace"),
        }
    }
}

/// Scans the next token from `input`.
///
/// Leading whitespace is skipped. Returns the token and the input that
/// follows it. Offsets in the token's span are relative to `input`.
///
/// When the input holds nothing but whitespace, the token is
/// [`TokenKind::Eof`] and the remainder is empty. When the first
/// non-whitespace byte cannot begin a token, the token is
/// [`TokenKind::Invalid`] and the remainder starts at that byte.
///
/// # Example
///
/// ```
/// use munch_lex::{next_token, TokenKind};
///
/// let (tok, rest) = next_token(b"  123abc");
/// assert_eq!(tok.kind, TokenKind::Integer);
/// assert_eq!(tok.text, b"123");
/// assert_eq!(rest, b"abc");
/// ```
pub fn next_token(input: &[u8]) -> (Token<'_>, &[u8]) {
    let mut cursor = Cursor::new(input);
    let token = extract(&mut cursor);
    (token, cursor.remaining())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(input: &str) -> (TokenKind, &str, &str) {
        let (tok, rest) = next_token(input.as_bytes());
        let consumed = input.len() - rest.len();
        (tok.kind, tok.as_str(), &input[consumed..])
    }

    #[test]
    fn test_whitespace_only_is_eof() {
        assert_eq!(next("   \t\n "), (TokenKind::Eof, "", ""));
        assert_eq!(next(""), (TokenKind::Eof, "", ""));
    }

    #[test]
    fn test_parenthesis_is_one_byte() {
        assert_eq!(next("(("), (TokenKind::Parenthesis, "(", "("));
        assert_eq!(next(")abc"), (TokenKind::Parenthesis, ")", "abc"));
    }

    #[test]
    fn test_operator_is_one_byte() {
        assert_eq!(next("<=3"), (TokenKind::Operator, "<", "=3"));
        assert_eq!(next("-1"), (TokenKind::Operator, "-", "1"));
    }

    #[test]
    fn test_integer_then_word() {
        assert_eq!(next("123abc"), (TokenKind::Integer, "123", "abc"));
        assert_eq!(next("abc"), (TokenKind::Word, "abc", ""));
    }

    #[test]
    fn test_zero_and_float() {
        assert_eq!(next("0.5"), (TokenKind::Float, "0.5", ""));
        assert_eq!(next("05"), (TokenKind::Zero, "0", "5"));
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        let (plain, _) = next_token(b"foo");
        let (padded, rest) = next_token(b"   foo");
        assert_eq!(plain.kind, padded.kind);
        assert_eq!(plain.text, padded.text);
        assert_eq!(padded.span, Span::new(3, 6, 1, 4));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_invalid_consumes_nothing() {
        let (tok, rest) = next_token(b"#");
        assert!(tok.is_invalid());
        assert_eq!(tok.span.start, 0);
        assert_eq!(rest, b"#");
    }

    #[test]
    fn test_invalid_after_whitespace() {
        let (tok, rest) = next_token(b"  @x");
        assert!(tok.is_invalid());
        assert_eq!(tok.span.start, 2);
        assert_eq!(rest, b"@x");
    }
}
