//! Biblioteca Digital — console loan-tracking engine
//!
//! # Overview
//!
//! This library ingests pipe-delimited text records describing library users,
//! books and loans, validates them line by line, and builds console and
//! static-HTML reports over the loaded data.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (User, Book, Loan, errors)
//! - [`validate`] - Character-alphabet scan and per-kind line validators
//! - [`io`] - Numbered raw-line file reading
//! - [`store`] - In-memory session state:
//!   - [`store::catalog`] - Id-keyed user and book catalogs
//!   - [`store::ledger`] - Append-only loan history and aggregation helpers
//!   - [`store::library`] - `LibraryStore`: file loading and error accumulation
//! - [`report`] - The five report builders plus console and HTML rendering
//! - [`cli`] - Argument parsing and the interactive menu
//!
//! # Pipeline
//!
//! Raw lines → character scan → field validation → catalogs / ledger (with
//! cross-reference checks against the catalogs loaded so far) → report
//! builders → console renderer or HTML exporter.
//!
//! # Error model
//!
//! Per-line validation and cross-reference problems are recoverable: they are
//! accumulated as [`types::LoadError`] records and the offending line is
//! skipped. Only I/O failure is fatal, surfaced as [`types::LibraryError`].

pub mod cli;
pub mod io;
pub mod report;
pub mod store;
pub mod types;
pub mod validate;

pub use report::Report;
pub use store::{Catalog, LibraryStore, LoanLedger};
pub use types::{Book, LibraryError, Loan, LoadError, SourceKind, User, LOAN_TERM_DAYS};
pub use validate::{validate_book, validate_loan, validate_user, Validated};
