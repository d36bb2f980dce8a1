//! Data service for the Learnist client.
//!
//! This module provides the [`DataService`] struct which sits between the
//! UI and the REST backend. Every read goes through the key-based
//! [`QueryCache`]: the composite key is built from the resource name and
//! the parameters that shaped the request, a fresh entry is served
//! directly, and a miss fetches from the backend and stores the result.
//! Mutations call the backend and then invalidate by key prefix, so the
//! next read re-fetches authoritative state — there are no optimistic
//! local updates.

pub mod admin;
pub mod courses;
pub mod flashcards;
pub mod lessons;
pub mod stories;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::api::{ApiError, LmsBackend};
use crate::cache::{QueryCache, QueryKey};
use crate::logger::Logger;

/// Cache-through data access layer shared by every screen.
///
/// Cloning is cheap; all clones share the same cache and backend.
#[derive(Clone)]
pub struct DataService {
    backend: Arc<dyn LmsBackend>,
    cache: Arc<Mutex<QueryCache>>,
    logger: Option<Logger>,
}

impl DataService {
    pub fn new(backend: Arc<dyn LmsBackend>, stale_after: Duration) -> Self {
        Self {
            backend,
            cache: Arc::new(Mutex::new(QueryCache::new(stale_after))),
            logger: None,
        }
    }

    /// Attach the UI logger so data-layer events show in the logs dialog.
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub(crate) fn backend(&self) -> &Arc<dyn LmsBackend> {
        &self.backend
    }

    pub(crate) fn log(&self, message: String) {
        log::info!("{message}");
        if let Some(logger) = &self.logger {
            logger.log(message);
        }
    }

    /// Serve `key` from cache when fresh, otherwise run `fetch` and store
    /// the result.
    pub(crate) async fn cached<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        {
            let cache = self.cache.lock().await;
            if let Some(hit) = cache.get_fresh::<T>(&key, Instant::now()) {
                return Ok(hit);
            }
        }

        let fresh = fetch().await?;

        let mut cache = self.cache.lock().await;
        cache.insert_at(key, &fresh, Instant::now());
        Ok(fresh)
    }

    /// Drop every cache entry under `prefix`; the next read re-fetches.
    pub(crate) async fn invalidate(&self, prefix: &[&str]) {
        let dropped = self.cache.lock().await.invalidate_prefix(prefix);
        if dropped > 0 {
            self.log(format!("Cache: invalidated {dropped} entries under {prefix:?}"));
        }
    }

    /// Drop the whole cache; used by the manual refresh key.
    pub async fn invalidate_all(&self) {
        self.cache.lock().await.clear();
        self.log("Cache: cleared".to_string());
    }

    /// Number of live cache entries, surfaced in the status bar.
    pub async fn cache_len(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// The authenticated user, cached for the session.
    pub async fn current_user(&self) -> Result<crate::models::User, ApiError> {
        let key = QueryKey::new(["users", "me"]);
        self.cached(key, || self.backend.fetch_current_user()).await
    }
}
