//! Key-based cache for remote query results.
//!
//! Every read goes through a composite [`QueryKey`] (resource name plus
//! the parameters that shaped the request), so changing a filter
//! parameter naturally addresses a distinct entry and only a genuinely
//! new key triggers a fetch. Entries carry their fetch time; a read is
//! served from cache only while the entry is younger than the stale
//! window. Mutations invalidate by key prefix, which drops every entry
//! for the touched resource regardless of its parameters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Composite cache key: resource name followed by request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn starts_with(&self, prefix: &[&str]) -> bool {
        self.0.len() >= prefix.len() && self.0.iter().zip(prefix).all(|(a, b)| a == b)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at: Instant,
}

/// In-memory query cache with a fixed staleness window.
#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    /// Store a snapshot for `key`, stamped at `now`.
    ///
    /// Values that fail to serialize are simply not cached; the caller
    /// already holds the fresh data and the next read will re-fetch.
    pub fn insert_at<T: Serialize>(&mut self, key: QueryKey, value: &T, now: Instant) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.insert(key, CacheEntry { value, fetched_at: now });
        }
    }

    /// Return the cached value for `key` if it is still within the stale
    /// window as of `now`. Stale or missing entries yield `None`.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &QueryKey, now: Instant) -> Option<T> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.fetched_at) >= self.stale_after {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Drop every entry whose key starts with the given segments.
    ///
    /// Returns how many entries were removed.
    pub fn invalidate_prefix(&mut self, prefix: &[&str]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    /// Drop a single entry.
    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
