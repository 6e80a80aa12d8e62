//! Memo of the most recently built forest
//!
//! Readers share the cached forest through an `Arc`; a rebuild happens only
//! when the input digest differs from the cached one.

use crate::error::TreeError;
use crate::tree::{build, input_digest, Forest};
use crate::types::Hash;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedForest {
    digest: Hash,
    forest: Arc<Forest>,
}

/// Shared single-entry forest cache.
#[derive(Debug, Default)]
pub struct ForestCache {
    entry: RwLock<Option<CachedForest>>,
}

impl ForestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the forest for `files`, rebuilding only if the mapping changed.
    pub fn get_or_build<I, K, V>(&self, files: I) -> Result<Arc<Forest>, TreeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = files.into_iter().collect();
        let digest = input_digest(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));

        {
            let entry = self.entry.read();
            if let Some(cached) = entry.as_ref().filter(|c| c.digest == digest) {
                debug!(digest = %hex::encode(&digest[..8]), "Forest cache hit");
                return Ok(cached.forest.clone());
            }
        }

        let forest = Arc::new(build(
            pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())),
        )?);

        let mut entry = self.entry.write();
        // Another thread may have stored the same digest while we built.
        if let Some(cached) = entry.as_ref().filter(|c| c.digest == digest) {
            return Ok(cached.forest.clone());
        }
        debug!(digest = %hex::encode(&digest[..8]), "Forest cache rebuilt");
        *entry = Some(CachedForest {
            digest,
            forest: forest.clone(),
        });
        Ok(forest)
    }

    /// Digest of the cached mapping, if any.
    pub fn digest(&self) -> Option<Hash> {
        self.entry.read().as_ref().map(|c| c.digest)
    }

    pub fn clear(&self) {
        *self.entry.write() = None;
    }
}
