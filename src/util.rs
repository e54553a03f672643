//! Shared utilities used across plagcheck components.

use std::fs;
use std::path::Path;

use crate::error::{PlagcheckError, Result};

/// Read a whole text file, tagging any I/O failure with the file path.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected, so arbitrary natural-language input never fails to decode.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| PlagcheckError::file_read(path, e))?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
