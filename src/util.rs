//! File helpers shared by the card codec, the transcript and config loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FlashcardError, Result};

/// Maximum file size that can be read into memory (10 MB).
///
/// Card decks and configs are tiny; anything past this is almost certainly
/// the wrong file.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MB

/// Read a file into a string, refusing files over `MAX_FILE_SIZE`.
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    read_to_string_with_limit(path, MAX_FILE_SIZE)
}

/// Read a file into a string with a custom size limit.
///
/// # Errors
///
/// Returns a storage error if:
/// * The file cannot be read (doesn't exist, permission denied, etc.)
/// * The file exceeds `max_size`
pub fn read_to_string_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| FlashcardError::storage(path, e))?;

    let size = metadata.len();
    if size > max_size {
        return Err(FlashcardError::storage(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file is too large ({} bytes, max {} bytes)", size, max_size),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| FlashcardError::storage(path, e))
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_replacing(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| FlashcardError::storage(path, e))
}
