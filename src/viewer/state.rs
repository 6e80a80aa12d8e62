//! Expand/collapse and selection state

use crate::error::TreeError;
use crate::tree::node::{FileNode, PathNode};
use crate::tree::walk::{find, walk};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Transient view state, kept independently of the forest it refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub expanded: BTreeSet<NodeId>,
    pub selected: Option<NodeId>,
}

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRow {
    pub depth: usize,
    pub id: NodeId,
    pub name: String,
    pub is_folder: bool,
    pub expanded: bool,
    pub selected: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    /// Flip a folder's expansion; returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn expand_all(&mut self, forest: &[PathNode]) {
        self.expanded.extend(
            walk(forest)
                .filter(|(_, node)| node.is_folder())
                .map(|(_, node)| node.id().to_string()),
        );
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Select a file by id. Folders cannot be selected.
    pub fn select(&mut self, forest: &[PathNode], id: &str) -> Result<(), TreeError> {
        let node = find(forest, id).ok_or_else(|| TreeError::NodeNotFound(id.to_string()))?;
        if node.is_folder() {
            return Err(TreeError::NotAFile(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn selected_file<'a>(&self, forest: &'a [PathNode]) -> Option<&'a FileNode> {
        self.selected
            .as_deref()
            .and_then(|id| find(forest, id))
            .and_then(PathNode::as_file)
    }

    /// Drop expanded ids and the selection that no longer exist in `forest`.
    pub fn retain_valid(&mut self, forest: &[PathNode]) {
        self.expanded
            .retain(|id| find(forest, id).is_some_and(PathNode::is_folder));
        if self.selected_file(forest).is_none() {
            self.selected = None;
        }
    }

    /// Rows to render: children appear only below expanded folders.
    pub fn visible_rows(&self, forest: &[PathNode]) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        self.push_rows(forest, 0, &mut rows);
        rows
    }

    fn push_rows(&self, nodes: &[PathNode], depth: usize, rows: &mut Vec<VisibleRow>) {
        for node in nodes {
            let expanded = node.is_folder() && self.is_expanded(node.id());
            rows.push(VisibleRow {
                depth,
                id: node.id().to_string(),
                name: node.name().to_string(),
                is_folder: node.is_folder(),
                expanded,
                selected: self.selected.as_deref() == Some(node.id()),
            });
            if expanded {
                self.push_rows(node.children(), depth + 1, rows);
            }
        }
    }
}
