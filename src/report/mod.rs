//! Reporting module
//!
//! - `builder` — assembles the five report row sets from the store
//! - `console` — fixed-width text rendering
//! - `html` — static HTML page export
//!
//! Both presentations consume the same [`builder::Report`], which keeps the
//! row contents byte-identical between console and HTML output.

pub mod builder;
pub mod console;
pub mod html;

pub use builder::{borrowed_books, history, overdue, statistics, unique_users, Report};
