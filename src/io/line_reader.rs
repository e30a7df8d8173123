//! Numbered raw-line reading
//!
//! Reads a whole UTF-8 data file into `(line_number, content)` pairs. Blank
//! lines are kept so the numbering always matches what the person editing the
//! file sees; skipping comments and blanks is the loader's job, not ours.
//!
//! An unreadable file is the one fatal condition in the load path — it is
//! surfaced as a [`LibraryError`] and never mixed into the per-line error
//! list.

use crate::types::LibraryError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read `path` and return its lines paired with 1-indexed line numbers
///
/// Line terminators are stripped; everything else, including surrounding
/// whitespace, is preserved for the validator to inspect.
pub fn read_lines(path: &Path) -> Result<Vec<(u64, String)>, LibraryError> {
    let content = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LibraryError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LibraryError::from(e),
    })?;

    let text = String::from_utf8(content).map_err(|_| LibraryError::InvalidEncoding {
        path: path.display().to_string(),
    })?;

    Ok(text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx as u64 + 1, line.to_string()))
        .collect())
}
