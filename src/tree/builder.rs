//! Forest construction from a flat path map
//!
//! Entries are collected in a flat arena with an id -> slot index so that a
//! folder shared by many paths is created exactly once. `finish` materializes
//! the arena into owned nodes and sorts every level.

use super::node::{FileNode, FolderNode, Forest, PathNode};
use super::order::sort_forest;
use super::path;
use crate::error::TreeError;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug)]
enum SlotKind {
    Folder { children: Vec<usize> },
    File { content: String },
}

#[derive(Debug)]
struct Slot {
    id: String,
    kind: SlotKind,
}

/// Incremental forest builder.
#[derive(Debug, Default)]
pub struct PathTreeBuilder {
    arena: Vec<Slot>,
    index: HashMap<String, usize>,
    roots: Vec<usize>,
    files: usize,
}

impl PathTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of file entries inserted so far
    pub fn len(&self) -> usize {
        self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files == 0
    }

    /// Insert one `path -> content` pair, creating any missing ancestor folders.
    ///
    /// The key becomes the file id unchanged; each prefix before a `/` is a
    /// folder id, empty segments included.
    pub fn insert(&mut self, file_path: &str, content: impl Into<String>) -> Result<(), TreeError> {
        if file_path.is_empty() {
            return Err(TreeError::EmptyPath);
        }

        let mut parent: Option<usize> = None;
        for folder_id in path::ancestor_ids(file_path) {
            parent = Some(self.folder_slot(folder_id, parent)?);
        }

        if let Some(&existing) = self.index.get(file_path) {
            let id = file_path.to_string();
            return Err(match self.arena[existing].kind {
                SlotKind::Folder { .. } => TreeError::PathCollision { id },
                SlotKind::File { .. } => TreeError::DuplicatePath(id),
            });
        }
        let slot = self.push(
            file_path.to_string(),
            SlotKind::File {
                content: content.into(),
            },
            parent,
        );
        self.files += 1;
        debug!(path = file_path, slot, "Inserted file");
        Ok(())
    }

    /// Materialize the sorted forest.
    pub fn finish(self) -> Forest {
        let folders = self.arena.len() - self.files;
        let files = self.files;
        let mut slots: Vec<Option<Slot>> = self.arena.into_iter().map(Some).collect();
        let mut forest: Forest = self
            .roots
            .iter()
            .filter_map(|&idx| materialize(&mut slots, idx))
            .collect();
        sort_forest(&mut forest);
        debug!(files, folders, roots = forest.len(), "Built path forest");
        forest
    }

    fn folder_slot(&mut self, id: &str, parent: Option<usize>) -> Result<usize, TreeError> {
        if let Some(&existing) = self.index.get(id) {
            return match self.arena[existing].kind {
                SlotKind::Folder { .. } => Ok(existing),
                SlotKind::File { .. } => Err(TreeError::PathCollision { id: id.to_string() }),
            };
        }
        Ok(self.push(
            id.to_string(),
            SlotKind::Folder {
                children: Vec::new(),
            },
            parent,
        ))
    }

    fn push(&mut self, id: String, kind: SlotKind, parent: Option<usize>) -> usize {
        let slot = self.arena.len();
        self.index.insert(id.clone(), slot);
        self.arena.push(Slot { id, kind });
        match parent {
            Some(parent) => {
                if let SlotKind::Folder { children } = &mut self.arena[parent].kind {
                    children.push(slot);
                }
            }
            None => self.roots.push(slot),
        }
        slot
    }
}

fn materialize(slots: &mut [Option<Slot>], idx: usize) -> Option<PathNode> {
    let slot = slots.get_mut(idx)?.take()?;
    let name = path::file_name(&slot.id).to_string();
    Some(match slot.kind {
        SlotKind::Folder { children } => PathNode::Folder(FolderNode {
            id: slot.id,
            name,
            children: children
                .into_iter()
                .filter_map(|child| materialize(slots, child))
                .collect(),
        }),
        SlotKind::File { content, .. } => PathNode::File(FileNode {
            extension: path::extension(&name).map(str::to_string),
            id: slot.id,
            name,
            content,
        }),
    })
}

/// Build a sorted forest from a `path -> content` mapping.
///
/// Key order of the input does not affect the output.
pub fn build<I, K, V>(files: I) -> Result<Forest, TreeError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut builder = PathTreeBuilder::new();
    for (file_path, content) in files {
        builder.insert(file_path.as_ref(), content)?;
    }
    Ok(builder.finish())
}
