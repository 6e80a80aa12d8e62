//! Path ids, folder prefixes and name/extension extraction
//!
//! A key is used verbatim as its file's id. Every `/` in the key closes a
//! folder whose id is the prefix before it, so segments are opaque text and
//! may be empty (`/src/Main.java` lives under a root folder with id `""`).

/// Separator between folder segments and the file name.
pub const SEPARATOR: char = '/';

/// Ids of the folders enclosing `path`, outermost first.
pub fn ancestor_ids(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices(SEPARATOR).map(move |(idx, _)| &path[..idx])
}

/// Last segment of an id.
pub fn file_name(id: &str) -> &str {
    match id.rfind(SEPARATOR) {
        Some(idx) => &id[idx + 1..],
        None => id,
    }
}

/// Text after the last `.` of a name, if the name contains one.
pub fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx + 1..])
}

/// Id of the parent folder, `None` for root-level ids.
pub fn parent_id(id: &str) -> Option<&str> {
    id.rfind(SEPARATOR).map(|idx| &id[..idx])
}
