//! Sibling ordering
//!
//! Folders sort before files; within a kind, names compare with a
//! locale-aware collation modelled on the Unicode root collation:
//!
//! 1. primary: base characters, ignoring case and accents, with
//!    whitespace < punctuation and symbols < digits < letters; ASCII
//!    punctuation and symbols follow the root collation table
//!    (`_` < `-` < `,` < ... < `.` < ... < `$`)
//! 2. secondary: accents (`e` < `é`)
//! 3. tertiary: case, lowercase first (`a` < `A`)
//!
//! Remaining ties are broken on raw code points so the order is total.

use super::node::PathNode;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two sibling nodes: folders first, then by name.
pub fn compare_nodes(a: &PathNode, b: &PathNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| compare_names(a.name(), b.name()))
}

/// Locale-aware name comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Sort a forest and, recursively, every folder's children.
pub fn sort_forest(nodes: &mut [PathNode]) {
    nodes.sort_by(compare_nodes);
    for node in nodes.iter_mut() {
        if let PathNode::Folder(folder) = node {
            sort_forest(&mut folder.children);
        }
    }
}

/// ASCII punctuation and symbols in root collation order.
const ASCII_VARIABLE_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight: `(class, rank)`.
///
/// Classes: 0 whitespace, 1 ASCII punctuation/symbols (ranked by the table),
/// 2 other punctuation/symbols (by code point), 3 digits, 4 letters.
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(rank) = ASCII_VARIABLE_ORDER.find(c) {
        (1, rank as u32)
    } else if c.is_numeric() {
        (3, c as u32)
    } else if c.is_alphanumeric() {
        (4, c as u32)
    } else {
        (2, c as u32)
    }
}

fn primary_key(s: &str) -> Vec<(u8, u32)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
        .collect()
}

fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> Vec<u8> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| u8::from(c.is_uppercase()))
        .collect()
}
