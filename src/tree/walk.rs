//! Depth-first traversal, lookup and summary helpers

use super::node::{FileNode, PathNode};
use super::path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pre-order iterator over a forest yielding `(depth, node)` in display order.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a PathNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a PathNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

pub fn walk(forest: &[PathNode]) -> Walk<'_> {
    Walk {
        stack: forest.iter().rev().map(|node| (0, node)).collect(),
    }
}

/// All file nodes in display order.
pub fn files(forest: &[PathNode]) -> impl Iterator<Item = &FileNode> {
    walk(forest).filter_map(|(_, node)| node.as_file())
}

/// Find a node by id, descending only through its ancestor folders.
pub fn find<'a>(forest: &'a [PathNode], id: &str) -> Option<&'a PathNode> {
    let mut level = forest;
    let mut prefix_len = 0;
    loop {
        let rest = &id[prefix_len..];
        let segment = rest.split(path::SEPARATOR).next()?;
        prefix_len += segment.len();
        let target = &id[..prefix_len];
        let node = level.iter().find(|n| n.id() == target)?;
        if prefix_len == id.len() {
            return Some(node);
        }
        prefix_len += 1;
        level = node.children();
    }
}

/// Aggregate counts for a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestSummary {
    pub folders: u64,
    pub files: u64,
    pub total_bytes: u64,
    pub max_depth: u64,
    /// Extension -> file count; files without an extension are under `""`
    pub extensions: BTreeMap<String, u64>,
}

pub fn summarize(forest: &[PathNode]) -> ForestSummary {
    let mut summary = ForestSummary::default();
    for (depth, node) in walk(forest) {
        summary.max_depth = summary.max_depth.max(depth as u64 + 1);
        match node {
            PathNode::Folder(_) => summary.folders += 1,
            PathNode::File(file) => {
                summary.files += 1;
                summary.total_bytes += file.content.len() as u64;
                *summary
                    .extensions
                    .entry(file.extension.clone().unwrap_or_default())
                    .or_insert(0) += 1;
            }
        }
    }
    summary
}
