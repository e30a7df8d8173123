//! I/O module
//!
//! Raw data-file reading. Rendering output lives in [`crate::report`].

pub mod line_reader;

pub use line_reader::read_lines;
