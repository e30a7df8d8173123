//! CLI module
//!
//! - `args` — clap argument parsing (data and output directories)
//! - `menu` — the interactive console menu loop

pub mod args;
pub mod menu;

pub use args::{parse_args, CliArgs};
