//! Lexer module.
//!
//! - `extract` - the token extraction loop shared by every entry point
//! - `core` - the stateful `Lexer` over a whole buffer

mod core;
mod extract;

pub use self::core::{tokenize, Lexer};
pub use self::extract::next_token;
