//! Input sources for `path -> content` mappings
//!
//! A mapping arrives either as the JSON object the backend serves for a
//! submission's files, or by scanning a directory on disk.

use crate::error::ApiError;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Flat `path -> content` mapping.
pub type FileMap = BTreeMap<String, String>;

/// Read a JSON object of `path -> content` from a file, or stdin for `-`.
pub fn load_json(path: &Path) -> Result<FileMap, ApiError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ApiError::io("<stdin>", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| ApiError::io(path.display(), e))?
    };
    let files = parse_json(&raw)?;
    debug!(source = %path.display(), files = files.len(), "Loaded file map");
    Ok(files)
}

/// Parse a JSON object of string values.
pub fn parse_json(raw: &str) -> Result<FileMap, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Collect every UTF-8 file below `root`, keyed by root-relative `/` path.
///
/// Files that are not valid UTF-8 are skipped.
pub fn scan_dir(root: &Path) -> Result<FileMap, ApiError> {
    if !root.is_dir() {
        return Err(ApiError::InvalidArgument(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    let mut files = FileMap::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string());
            ApiError::io(path, std::io::Error::other(e.to_string()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let bytes = std::fs::read(entry.path()).map_err(|e| ApiError::io(entry.path().display(), e))?;
        match String::from_utf8(bytes) {
            Ok(content) => {
                files.insert(key, content);
            }
            Err(_) => warn!(path = %key, "Skipping non UTF-8 file"),
        }
    }
    debug!(root = %root.display(), files = files.len(), "Scanned directory");
    Ok(files)
}
