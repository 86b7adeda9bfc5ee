//! PokeAPI response cache with JSON persistence.
//!
//! Maps a canonical request URL to the raw response body text. Entries never
//! expire and nothing is evicted: the catalog is a few thousand tiny text
//! blobs, so unbounded growth is an accepted tradeoff. A lookup for an absent
//! key is a distinct [`ForgeError::CacheMiss`] outcome so the fetch path can
//! fall through to the network.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ForgeError, Result};

/// Persistent store serialized to JSON.
#[derive(Debug, Serialize, Deserialize, Default)]
struct CacheStore {
    entries: HashMap<String, String>,
}

/// URL-keyed response cache with JSON persistence.
pub struct ResponseCache {
    store: CacheStore,
    path: PathBuf,
}

impl ResponseCache {
    /// Open the cache backed by the given file path.
    ///
    /// Loads existing entries from disk; an absent file starts an empty store
    /// (idempotent setup). A corrupt file also starts empty rather than
    /// aborting — every entry can be re-fetched.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = Self::load_from_disk(&path);
        Self { store, path }
    }

    /// Look up the raw response body cached for `url`.
    ///
    /// Fails with [`ForgeError::CacheMiss`] when no entry exists.
    pub fn get(&self, url: &str) -> Result<String> {
        match self.store.entries.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(ForgeError::CacheMiss),
        }
    }

    /// Store a response body for `url`, replacing any existing entry.
    ///
    /// Upsert semantics: safe to call with a key that is already present
    /// (re-fetch happens when a previously cached value failed to decode).
    pub fn put(&mut self, url: &str, body: &str) {
        if self
            .store
            .entries
            .insert(url.to_string(), body.to_string())
            .is_some()
        {
            debug!(url, "Replaced existing cache entry");
        }
        self.save_to_disk();
    }

    /// Return the number of cached responses.
    pub fn len(&self) -> usize {
        self.store.entries.len()
    }

    /// Return `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.store.entries.is_empty()
    }

    // -- private helpers ---------------------------------------------------

    fn load_from_disk(path: &Path) -> CacheStore {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(store) => store,
                Err(e) => {
                    warn!("Response cache file is corrupt, starting empty: {}", e);
                    CacheStore::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheStore::default(),
            Err(e) => {
                warn!("Failed to read response cache, starting empty: {}", e);
                CacheStore::default()
            }
        }
    }

    fn save_to_disk(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(data) = serde_json::to_string_pretty(&self.store) {
            if let Err(e) = std::fs::write(&self.path, data) {
                warn!("Failed to save response cache: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test cache with a unique temp path so parallel tests don't collide.
    fn test_cache() -> ResponseCache {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let tid = std::thread::current().id();
        ResponseCache {
            store: CacheStore::default(),
            path: PathBuf::from(format!("/tmp/trainerforge-test-cache-{tid:?}-{id}.json")),
        }
    }

    #[test]
    fn test_cache_miss_is_distinct() {
        let cache = test_cache();
        assert!(matches!(
            cache.get("https://pokeapi.co/api/v2/pokemon/ditto"),
            Err(ForgeError::CacheMiss)
        ));
    }

    #[test]
    fn test_cache_round_trip() {
        let mut cache = test_cache();
        cache.put("https://example.test/k", "{\"name\":\"ditto\"}");
        assert_eq!(
            cache.get("https://example.test/k").unwrap(),
            "{\"name\":\"ditto\"}"
        );
    }

    #[test]
    fn test_cache_upsert_last_write_wins() {
        let mut cache = test_cache();
        cache.put("k", "v1");
        cache.put("k", "v2");
        assert_eq!(cache.get("k").unwrap(), "v2");
        assert_eq!(cache.len(), 1, "upsert must not create a duplicate entry");
    }

    #[test]
    fn test_cache_persists_across_instances() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cache").join("responses.json");
        {
            let mut cache = ResponseCache::open(&path);
            cache.put("url", "body");
        }
        let reopened = ResponseCache::open(&path);
        assert_eq!(reopened.get("url").unwrap(), "body");
    }

    #[test]
    fn test_cache_absent_file_starts_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = ResponseCache::open(dir.path().join("nope.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_corrupt_file_starts_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("responses.json");
        std::fs::write(&path, "not json at all {{{").unwrap();
        let cache = ResponseCache::open(&path);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_arbitrary_string_values() {
        let mut cache = test_cache();
        let value = "plain text, not json \u{1F525}";
        cache.put("k", value);
        assert_eq!(cache.get("k").unwrap(), value);
    }
}
