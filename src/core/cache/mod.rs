//! Cache module for synthesized audio.
//!
//! Provides an in-memory TTL cache keyed by a content fingerprint of the
//! input text, with lazy read-time expiry.

pub mod store;

pub use store::{AudioCache, AudioCacheConfig, CacheMetrics};
