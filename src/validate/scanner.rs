//! Character-alphabet scan
//!
//! Every input line is checked character by character before any field
//! splitting happens. The permitted alphabet is Unicode letters (accented
//! letters and `ñ` included), digits, whitespace, and a fixed punctuation set
//! covering the field separator and common name/title punctuation.
//!
//! Positions are 1-indexed because they are reported directly to the person
//! fixing the data file.

/// Punctuation permitted beyond letters, digits and whitespace
const PERMITTED_EXTRAS: &[char] = &['|', '-', '_', '\'', '.', ',', '(', ')', ':', ';', '/'];

fn is_permitted(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric() || ch.is_whitespace() || PERMITTED_EXTRAS.contains(&ch)
}

/// Scan a line and return every invalid character with its 1-indexed position
///
/// An empty result means the line passed the alphabet check. Positions count
/// characters, not bytes, so multi-byte letters occupy a single position.
pub fn scan_characters(line: &str) -> Vec<(usize, char)> {
    line.chars()
        .enumerate()
        .filter(|(_, ch)| !is_permitted(*ch))
        .map(|(idx, ch)| (idx + 1, ch))
        .collect()
}
