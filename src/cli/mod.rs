//! Command-line interface definition and shell completions.

pub mod args;
pub mod completions;
