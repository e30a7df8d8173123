//! In-memory state module
//!
//! - `catalog` — id-keyed user and book collections (insertion-ordered)
//! - `ledger` — append-only loan history plus aggregation primitives
//! - `library` — `LibraryStore`: the session state and file loading

pub mod catalog;
pub mod ledger;
pub mod library;

pub use catalog::Catalog;
pub use ledger::{count_frequencies, dedup_preserving_order, max_by_value, LoanLedger};
pub use library::LibraryStore;
