//! Folder and file node types

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub content: String,
}

/// Folder node representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: NodeId,
    pub name: String,
    pub children: Vec<PathNode>, // direct children only, folders first then by name
}

/// Node of a path forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathNode {
    Folder(FolderNode),
    File(FileNode),
}

/// Ordered root-level nodes; there is no synthetic root folder.
pub type Forest = Vec<PathNode>;

impl PathNode {
    pub fn id(&self) -> &str {
        match self {
            PathNode::Folder(folder) => &folder.id,
            PathNode::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PathNode::Folder(folder) => &folder.name,
            PathNode::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, PathNode::Folder(_))
    }

    /// Direct children; always empty for files.
    pub fn children(&self) -> &[PathNode] {
        match self {
            PathNode::Folder(folder) => &folder.children,
            PathNode::File(_) => &[],
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            PathNode::File(file) => Some(file),
            PathNode::Folder(_) => None,
        }
    }
}
