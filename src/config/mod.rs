//! Configuration
//!
//! Layered configuration for rendering and logging. Sources, lowest to
//! highest precedence: built-in defaults, global file, explicit file,
//! `CODEVIEW_*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Text rendering options for the tree view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Spaces per nesting level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Colorize folder names and extensions
    #[serde(default = "default_true")]
    pub color: bool,

    /// Append content size to file rows
    #[serde(default)]
    pub show_sizes: bool,
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            color: default_true(),
            show_sizes: false,
        }
    }
}
