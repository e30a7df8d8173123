//! Line validation module
//!
//! Validation runs in two stages for every record kind:
//! - `scanner` — character-alphabet scan with 1-indexed error positions,
//!   always first, short-circuiting on any hit
//! - `record` — field splitting and the per-kind format rules

pub mod record;
pub mod scanner;

pub use record::{
    validate_book, validate_loan, validate_user, BookRecord, LoanRecord, UserRecord, Validated,
};
pub use scanner::scan_characters;
