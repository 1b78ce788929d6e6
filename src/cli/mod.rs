//! CLI module
//!
//! Command-line interface for browsing job listings.
//!
//! # Commands
//!
//! - `fetch` - Print one page of listings and exit
//! - `browse` - Interactive paging with `n`/`p`/`f`/`q` commands

mod commands;
mod runner;

pub use commands::{Cli, Commands, FilterArgs, OutputFormat};
pub use runner::Runner;
