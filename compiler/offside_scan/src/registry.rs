//! Per-stream indentation caches with explicit lifetime.
//!
//! Each stream gets its own [`IndentCache`], created on first use and dropped
//! when the owner of the stream calls [`IndentCacheRegistry::release`]. Cache
//! entries are never invalidated in place: an edited buffer is a new stream
//! with a new [`StreamId`], and the old entry simply stops being looked up.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::indent::IndentCache;
use crate::input::StreamId;

/// Map from stream identity to that stream's indentation cache.
#[derive(Debug, Default)]
pub struct IndentCacheRegistry {
    caches: FxHashMap<StreamId, IndentCache>,
}

impl IndentCacheRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache for `stream`, created empty if the stream is new.
    pub fn cache_for(&mut self, stream: StreamId) -> &mut IndentCache {
        self.caches.entry(stream).or_insert_with(|| {
            debug!(%stream, "indent cache created");
            IndentCache::new()
        })
    }

    /// The cache for `stream`, if one exists.
    pub fn get(&self, stream: StreamId) -> Option<&IndentCache> {
        self.caches.get(&stream)
    }

    /// Drop the cache for a discarded stream, returning it if present.
    pub fn release(&mut self, stream: StreamId) -> Option<IndentCache> {
        let released = self.caches.remove(&stream);
        if released.is_some() {
            debug!(%stream, "indent cache released");
        }
        released
    }

    pub fn contains(&self, stream: StreamId) -> bool {
        self.caches.contains_key(&stream)
    }

    /// Number of live caches.
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }
}
