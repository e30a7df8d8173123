//! Per-kind line validators
//!
//! Each validator runs the character scan first and short-circuits on any hit
//! (one message per invalid character, nothing else checked). Only then is the
//! line split on `|`, each field trimmed, and the field-count / emptiness /
//! date rules for the record kind applied.
//!
//! Validators never panic on malformed input: failure is a list of messages
//! for the caller to tag with source kind and line number. The fatal-error
//! path ([`crate::types::LibraryError`]) is reserved for I/O.

use crate::validate::scanner::scan_characters;
use chrono::NaiveDate;

/// Validation outcome: the parsed record, or the messages explaining why not
pub type Validated<T> = Result<T, Vec<String>>;

/// A validated user line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
}

/// A validated book line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
}

/// A validated loan line
///
/// The 4-field input form leaves both hint fields empty; the 6-field form
/// carries a user-name and title hint used as the first resolution fallback
/// in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRecord {
    pub user_id: String,
    pub user_name: String,
    pub book_id: String,
    pub book_title: String,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Split on `|` and trim surrounding whitespace from every field
fn split_fields(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

/// Run the character scan and turn any hits into messages
fn check_alphabet(line: &str) -> Result<(), Vec<String>> {
    let hits = scan_characters(line);
    if hits.is_empty() {
        return Ok(());
    }
    Err(hits
        .into_iter()
        .map(|(pos, ch)| format!("pos {pos}: '{ch}' inválido"))
        .collect())
}

/// Strict `YYYY-MM-DD` calendar date; rejects non-existent dates
fn parse_date(field: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(field, "%Y-%m-%d").ok()
}

/// Validate a `id_usuario|nombre` line
pub fn validate_user(line: &str) -> Validated<UserRecord> {
    check_alphabet(line)?;

    let fields = split_fields(line);
    if fields.len() != 2 {
        return Err(vec![format!(
            "expected 2 fields (id_usuario|nombre), got {}",
            fields.len()
        )]);
    }

    let (id, name) = (fields[0], fields[1]);
    if id.is_empty() || name.is_empty() {
        return Err(vec!["id_usuario and nombre must not be empty".to_string()]);
    }

    Ok(UserRecord {
        id: id.to_string(),
        name: name.to_string(),
    })
}

/// Validate a `id_libro|titulo` line
pub fn validate_book(line: &str) -> Validated<BookRecord> {
    check_alphabet(line)?;

    let fields = split_fields(line);
    if fields.len() != 2 {
        return Err(vec![format!(
            "expected 2 fields (id_libro|titulo), got {}",
            fields.len()
        )]);
    }

    let (id, title) = (fields[0], fields[1]);
    if id.is_empty() || title.is_empty() {
        return Err(vec!["id_libro and titulo must not be empty".to_string()]);
    }

    Ok(BookRecord {
        id: id.to_string(),
        title: title.to_string(),
    })
}

/// Validate a loan line in either accepted form
///
/// - 4 fields: `id_usuario|id_libro|fecha_prestamo|fecha_devolucion`
/// - 6 fields: `id_usuario|nombre_usuario|id_libro|titulo_libro|fecha_prestamo|fecha_devolucion`
///
/// The loan date is required; the return date may be empty, meaning the book
/// has not come back yet.
pub fn validate_loan(line: &str) -> Validated<LoanRecord> {
    check_alphabet(line)?;

    let fields = split_fields(line);
    let (user_id, user_name, book_id, book_title, loan_field, return_field) = match fields.len() {
        4 => (fields[0], "", fields[1], "", fields[2], fields[3]),
        6 => (fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]),
        n => {
            return Err(vec![format!(
                "unsupported format, use 4 or 6 fields, got {n}"
            )])
        }
    };

    let Some(loan_date) = parse_date(loan_field) else {
        return Err(vec![format!("invalid fecha_prestamo: '{loan_field}'")]);
    };

    let return_date = if return_field.is_empty() {
        None
    } else {
        match parse_date(return_field) {
            Some(date) => Some(date),
            None => {
                return Err(vec![format!("invalid fecha_devolucion: '{return_field}'")]);
            }
        }
    };

    Ok(LoanRecord {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        book_id: book_id.to_string(),
        book_title: book_title.to_string(),
        loan_date,
        return_date,
    })
}
