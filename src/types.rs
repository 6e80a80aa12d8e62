//! Core types shared across the crate.

/// NodeId: path of a node from the forest root, the input key for files (e.g. `src/Main.java`)
pub type NodeId = String;

/// Hash: Generic 256-bit hash value
pub type Hash = [u8; 32];
