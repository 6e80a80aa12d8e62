//! Tooling & Integration Layer
//!
//! CLI commands and text formatting over the tree and viewer modules.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, SourceArgs};
