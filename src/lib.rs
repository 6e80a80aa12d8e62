//! Codeview: Path Tree Reconstruction
//!
//! Turns a flat mapping of `path -> content` (as served for a submission's
//! files) into an ordered forest of folder and file nodes for a code viewer.

pub mod config;
pub mod error;
pub mod logging;
pub mod source;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod viewer;

pub use error::{ApiError, TreeError};
pub use tree::{build, FileNode, FolderNode, Forest, PathNode, PathTreeBuilder};
