//! munch-lex - Maximal-Munch Lexical Scanner
//!
//! This crate turns a byte buffer into tokens of six categories: operators,
//! parentheses, the literal `0`, integers, floating-point numbers and words.
//! Whitespace separates tokens and is never emitted.
//!
//! # Overview
//!
//! Scanning is driven by a small deterministic automaton. Each call runs the
//! automaton as far as the input allows, then backtracks to the last accepting
//! state it passed through, so every token is the longest valid prefix at its
//! position (maximal munch). `12a` scans as the integer `12` followed by the
//! word `a`, and `05` as `0` followed by `5`.
//!
//! # Example Usage
//!
//! ```
//! use munch_lex::{next_token, Lexer, TokenKind};
//!
//! // One token at a time over a byte slice
//! let (token, rest) = next_token(b" 0.5+x");
//! assert_eq!(token.kind, TokenKind::Float);
//! assert_eq!(token.as_str(), "0.5");
//! assert_eq!(rest, b"+x");
//!
//! // Or a whole buffer with positions
//! let mut lexer = Lexer::new("sum(1 2)");
//! for token in &mut lexer {
//!     println!("{}:{} {}", token.span.line, token.span.column, token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`char_class`] - byte classification table
//! - [`state`] - automaton states and transitions
//! - [`fsm`] - longest-match scan with backtracking
//! - [`lexer`] - token extraction and the `Lexer` type
//! - [`token`] - token definitions
//! - [`cursor`] - position tracking over the input
//!
//! # Token Categories
//!
//! | Category | Pattern |
//! |---|---|
//! | operator | one of `+ - * / % ^ = < > ! & \| ~` |
//! | parenthesis | `(` or `)` |
//! | zero | `0` |
//! | integer | `[1-9][0-9]*` |
//! | float | `(0\|[1-9][0-9]*)\.[0-9]*` |
//! | word | `[A-Za-z_]+` |
//!
//! Any other byte, including every non-ASCII byte, is unrecognized and
//! produces an [`TokenKind::Invalid`] sentinel.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_class;
pub mod cursor;
pub mod error;
pub mod fsm;
pub mod lexer;
pub mod span;
pub mod state;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use char_class::{classify, CharClass};
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use fsm::{longest_match, Match};
pub use lexer::{next_token, tokenize, Lexer};
pub use span::Span;
pub use state::State;
pub use token::{Token, TokenKind};
