//! Error types for munch-lex
//!
//! The scanner itself never fails: it reports problems through sentinel
//! tokens. These errors are for callers that prefer a `Result`.

use thiserror::Error;

use crate::span::Span;

/// Error type for whole-input tokenization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A byte that does not begin any token
    #[error("unrecognized character {} at {span}", describe_byte(.byte))]
    UnrecognizedCharacter {
        /// The offending byte
        byte: u8,
        /// Empty span at the offending byte
        span: Span,
    },
}

impl ScanError {
    /// Location of the offending input
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnrecognizedCharacter { span, .. } => *span,
        }
    }
}

fn describe_byte(byte: &u8) -> String {
    let byte = *byte;
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

/// Result type alias for tokenization
pub type ScanResult<T> = std::result::Result<T, ScanError>;
