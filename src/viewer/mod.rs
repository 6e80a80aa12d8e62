//! Viewer
//!
//! State a code viewer keeps next to a forest: which folders are expanded,
//! which file is selected, and a memo of the last built forest so the tree is
//! re-derived only when the fetched mapping actually changes.

pub mod cache;
pub mod state;

pub use cache::ForestCache;
pub use state::{ViewState, VisibleRow};
