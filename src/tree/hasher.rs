//! Input identity digest
//!
//! Digest of a `path -> content` mapping, used to tell whether a freshly
//! fetched mapping differs from the one a forest was built from.

use crate::types::Hash;

/// Compute an order-independent BLAKE3 digest of a mapping.
///
/// Pairs are hashed sorted by path, each field length-prefixed so that
/// `("ab", "c")` and `("a", "bc")` never collide.
pub fn input_digest<I, K, V>(files: I) -> Hash
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = files.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let mut hasher = blake3::Hasher::new();
    hasher.update(&(pairs.len() as u64).to_le_bytes());
    for (path, content) in &pairs {
        for field in [path.as_ref(), content.as_ref()] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    *hasher.finalize().as_bytes()
}
