//! In-memory audio result cache.
//!
//! Maps a content fingerprint of validated input text to previously
//! synthesized audio bytes, with time-based expiry. Expiry is lazy: a stale
//! entry is detected and removed on read, never by a background sweep. The
//! cache lives for the process lifetime only.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use moka::future::{Cache as MokaCache, CacheBuilder as MokaCacheBuilder};
use parking_lot::RwLock;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_128;

/// Hit/miss counters for cache observability.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    hits: Arc<RwLock<u64>>,
    misses: Arc<RwLock<u64>>,
    sets: Arc<RwLock<u64>>,
    evictions: Arc<RwLock<u64>>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_hit(&self) {
        *self.hits.write() += 1;
    }

    fn record_miss(&self) {
        *self.misses.write() += 1;
    }

    fn record_set(&self) {
        *self.sets.write() += 1;
    }

    fn record_eviction(&self) {
        *self.evictions.write() += 1;
    }

    /// Current counters as `(hits, misses, sets, evictions)`.
    pub fn get_stats(&self) -> (u64, u64, u64, u64) {
        (
            *self.hits.read(),
            *self.misses.read(),
            *self.sets.read(),
            *self.evictions.read(),
        )
    }
}

/// Immutable cache entry; the only mutation is removal.
struct CacheEntry {
    data: Bytes,
    created_at: Instant,
}

/// Configuration for the audio cache.
#[derive(Debug, Clone)]
pub struct AudioCacheConfig {
    /// Maximum number of entries before capacity eviction kicks in.
    pub max_entries: u64,
    /// Optional maximum total payload size in bytes.
    pub max_size_bytes: Option<u64>,
    /// Entry time-to-live, evaluated lazily at read time.
    pub ttl: Duration,
}

impl Default for AudioCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            max_size_bytes: Some(500 * 1024 * 1024), // 500MB
            ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// TTL content-addressed store for synthesized audio.
///
/// Keys are a fingerprint of the exact validated input text, not of its
/// Romanized form, so distinct inputs with identical Roman output occupy
/// distinct entries. Lookups and stores are linearizable; no lock is held
/// across an external call.
pub struct AudioCache {
    cache: MokaCache<String, Arc<CacheEntry>>,
    ttl: Duration,
    metrics: CacheMetrics,
}

impl AudioCache {
    pub fn new(config: AudioCacheConfig) -> Self {
        let mut builder = MokaCacheBuilder::new(config.max_entries);

        if let Some(max_size) = config.max_size_bytes {
            builder = builder.weigher(|_key, entry: &Arc<CacheEntry>| entry.data.len() as u32);
            builder = builder.max_capacity(max_size);
        }

        Self {
            cache: builder.build(),
            ttl: config.ttl,
            metrics: CacheMetrics::new(),
        }
    }

    /// Content fingerprint over the UTF-8 bytes of the input text. A cache
    /// key, not a security boundary.
    pub fn fingerprint(text: &str) -> String {
        format!("{:032x}", xxh3_128(text.as_bytes()))
    }

    /// Returns the cached audio for `text` if a live entry exists.
    ///
    /// An entry older than the TTL is treated as a miss and removed, so a
    /// subsequent lookup misses without re-evaluating expiry.
    pub async fn lookup(&self, text: &str) -> Option<Bytes> {
        let key = Self::fingerprint(text);

        if let Some(entry) = self.cache.get(&key).await {
            if entry.created_at.elapsed() < self.ttl {
                debug!("Cache hit for text hash: {}...", &key[..8]);
                self.metrics.record_hit();
                return Some(entry.data.clone());
            }
            debug!("Cache expired for text hash: {}...", &key[..8]);
            self.cache.invalidate(&key).await;
            self.metrics.record_eviction();
        }

        self.metrics.record_miss();
        None
    }

    /// Stores synthesized audio under the fingerprint of `text`,
    /// overwriting any previous entry. A single atomic map insertion.
    pub async fn store(&self, text: &str, audio: Bytes) {
        let key = Self::fingerprint(text);

        debug!(
            "Caching audio for text hash: {}... ({} bytes)",
            &key[..8],
            audio.len()
        );

        let entry = Arc::new(CacheEntry {
            data: audio,
            created_at: Instant::now(),
        });
        self.cache.insert(key, entry).await;
        self.metrics.record_set();
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
