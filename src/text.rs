//! Whole-file text I/O under the fixed UTF-8 encoding

use std::fs;
use std::path::Path;

use crate::error::{RelprepError, Result};

/// Read a file and decode its contents as UTF-8.
///
/// Decoding is strict: invalid bytes abort with a diagnostic instead of being
/// replaced, so a mis-encoded source document can never reach the published
/// description.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| RelprepError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|_| RelprepError::DecodeFailed {
        path: path.display().to_string(),
    })
}

/// Encode text as UTF-8 and write it to a file, truncating existing content.
pub fn write_text(text: &str, path: &Path) -> Result<()> {
    println!("writing to: {}", path.display());

    fs::write(path, text.as_bytes()).map_err(|e| RelprepError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
