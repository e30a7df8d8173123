//! Types module
//!
//! Core data structures used throughout the application:
//! - `user` / `book`: catalog entries
//! - `loan`: the loan record and the overdue policy
//! - `error`: fatal errors and recoverable per-line load errors

pub mod book;
pub mod error;
pub mod loan;
pub mod user;

pub use book::Book;
pub use error::{LibraryError, LoadError, SourceKind};
pub use loan::{Loan, LOAN_TERM_DAYS};
pub use user::User;
