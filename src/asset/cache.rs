//! Per-build asset hash cache.

use dashmap::DashMap;
use std::path::{Path, PathBuf};

use super::hash::{ContentHash, compute_file_hash};

/// Memoizes content digests of static assets for one build.
///
/// Keyed by asset path relative to the static root. Entries are computed
/// lazily on first request and never evicted; a build is a short-lived
/// single-process run, so staleness is not a concern. Constructed once per
/// build and passed by reference to the URL helpers.
///
/// Missing assets are not cached: a later build step may still create the
/// file, and re-checking the filesystem keeps that path open.
pub struct AssetHashCache {
    root: PathBuf,
    hashes: DashMap<String, ContentHash>,
}

impl AssetHashCache {
    /// Create a cache rooted at the static-asset directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            hashes: DashMap::new(),
        }
    }

    /// The static-asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full content digest for an asset, or `None` if the file is missing.
    ///
    /// The first request reads and digests the file; later requests return
    /// the stored digest without touching the filesystem.
    pub fn digest(&self, path: &str) -> Option<ContentHash> {
        if let Some(cached) = self.hashes.get(path) {
            return Some(*cached);
        }

        let hash = compute_file_hash(&self.root.join(path));
        if hash.is_empty() {
            crate::log!("warning"; "{} does not exist", path);
            return None;
        }

        self.hashes.insert(path.to_string(), hash);
        Some(hash)
    }

    /// Five-character cache-busting token, or empty when the asset is missing.
    pub fn short_hash(&self, path: &str) -> String {
        self.digest(path).map(ContentHash::short).unwrap_or_default()
    }

    /// Number of cached digests.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
