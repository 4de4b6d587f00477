//! Common types and utilities for muncht commands.

use std::io::Read;
use std::path::Path;

use crate::error::{MunchtError, Result};

/// Label used for standard input in reports.
pub const STDIN_LABEL: &str = "<stdin>";

/// An input buffer together with the name it is reported under.
#[derive(Debug, Clone)]
pub struct Source {
    /// Display name (file path or [`STDIN_LABEL`]).
    pub name: String,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

/// Returns `true` if `path` means "read standard input".
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Read a file, or standard input when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<Source> {
    match path {
        Some(path) if !is_stdin(Some(path)) => read_file(path),
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            Ok(Source {
                name: STDIN_LABEL.to_string(),
                bytes,
            })
        },
    }
}

/// Read a file into memory.
pub fn read_file(path: &Path) -> Result<Source> {
    if !path.exists() {
        return Err(MunchtError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MunchtError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read input");
    Ok(Source {
        name: path.display().to_string(),
        bytes,
    })
}
