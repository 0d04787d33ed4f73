//! Command line interface module
//!
//! Argument parsing and command handlers

pub mod args;
pub mod commands;

// Re-export the main types
pub use args::Args;
pub use commands::{CheckCommand, Command, InitCommand, ValidateCommand, VersionCommand};
