//! Path Tree
//!
//! Reconstructs a folder/file forest from `/`-delimited paths. Folder nodes
//! are synthesized from path prefixes and deduplicated by id; every level is
//! sorted folders-first, then by name.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod order;
pub mod path;
pub mod walk;

pub use builder::{build, PathTreeBuilder};
pub use hasher::input_digest;
pub use node::{FileNode, FolderNode, Forest, PathNode};
