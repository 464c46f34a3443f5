//! Scope membership cache
//!
//! Resolves the teammate ↔ scope relationship. The teammate list endpoint
//! does not carry scopes, so a rebuild walks every teammate page and then
//! fetches each teammate's detail record with bounded concurrency. Queries
//! only see an index once a rebuild has completed.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use tokio::sync::Mutex;

use super::catalog;
use crate::client::models::TeammateScope;
use crate::client::{SendGridApi, fetch_ordered};
use crate::config::DEFAULT_DETAIL_CONCURRENCY;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Never built, or the last rebuild failed
    Empty,
    Building,
    Ready,
}

type ScopeIndex = HashMap<String, Vec<Arc<TeammateScope>>>;

#[derive(Debug)]
struct Inner {
    state: CacheState,
    /// Bumped on every successful rebuild
    generation: u64,
    index: ScopeIndex,
}

/// Index from scope name to the teammates holding it.
pub struct ScopeCache<C> {
    client: Arc<C>,
    detail_concurrency: usize,
    inner: RwLock<Inner>,
    /// Serializes rebuilds
    build_lock: Mutex<()>,
}

impl<C: SendGridApi> ScopeCache<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self::with_concurrency(client, DEFAULT_DETAIL_CONCURRENCY)
    }

    /// Create a cache whose rebuild keeps at most `detail_concurrency`
    /// teammate detail requests in flight.
    pub fn with_concurrency(client: Arc<C>, detail_concurrency: usize) -> Self {
        Self {
            client,
            detail_concurrency: detail_concurrency.max(1),
            inner: RwLock::new(Inner {
                state: CacheState::Empty,
                generation: 0,
                index: HashMap::new(),
            }),
            build_lock: Mutex::new(()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> CacheState {
        self.read().state
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    /// Number of scopes with at least one member.
    pub fn scope_count(&self) -> usize {
        let inner = self.read();
        if inner.state == CacheState::Ready {
            inner.index.len()
        } else {
            0
        }
    }

    /// Discard the current index and build a new one from upstream.
    ///
    /// Any list or detail failure aborts the rebuild and leaves the cache
    /// `Empty`; no stale buckets remain readable.
    pub async fn rebuild(&self) -> Result<()> {
        let _guard = self.build_lock.lock().await;

        {
            let mut inner = self.write();
            inner.state = CacheState::Building;
            inner.index.clear();
        }

        info!("Rebuilding scope cache");

        match self.build_index().await {
            Ok((index, teammates)) => {
                let mut inner = self.write();
                info!(
                    "Scope cache ready: {} teammates, {} scopes",
                    teammates,
                    index.len()
                );
                inner.index = index;
                inner.generation += 1;
                inner.state = CacheState::Ready;
                Ok(())
            }
            Err(e) => {
                let mut inner = self.write();
                inner.index.clear();
                inner.state = CacheState::Empty;
                Err(e)
            }
        }
    }

    /// Teammates holding `scope`, in upstream list order.
    ///
    /// Returns an empty list when the cache is not `Ready`.
    pub fn users_for_scope(&self, scope: &str) -> Vec<Arc<TeammateScope>> {
        let inner = self.read();
        if inner.state != CacheState::Ready {
            return Vec::new();
        }
        inner.index.get(scope).cloned().unwrap_or_default()
    }

    async fn build_index(&self) -> Result<(ScopeIndex, usize)> {
        let usernames = self.all_usernames().await?;
        let teammates = usernames.len();

        let client = &self.client;
        let details = fetch_ordered(
            usernames,
            |username: String| async move { client.get_teammate(&username).await },
            self.detail_concurrency,
        )
        .await?;

        let mut index = ScopeIndex::new();
        for detail in details {
            let detail = Arc::new(detail);
            for scope in &detail.scopes {
                if scope.is_empty() {
                    warn!("Skipping empty scope on teammate {}", detail.username());
                    continue;
                }
                if !catalog::is_known(scope) {
                    debug!(
                        "Ignoring scope {} outside the catalog (teammate {})",
                        scope,
                        detail.username()
                    );
                    continue;
                }

                let bucket = index.entry(scope.clone()).or_default();
                let already_present = bucket.last().is_some_and(|t| Arc::ptr_eq(t, &detail));
                if !already_present {
                    bucket.push(Arc::clone(&detail));
                }
            }
        }

        Ok((index, teammates))
    }

    /// Walk the full teammate list.
    async fn all_usernames(&self) -> Result<Vec<String>> {
        let mut usernames = Vec::new();
        let mut token = String::new();

        loop {
            let page = self.client.list_teammates(&token).await?;
            debug!("Teammate page returned {} rows", page.items.len());

            let done = page.is_last();
            usernames.extend(page.items.into_iter().map(|t| t.username));
            if done {
                break;
            }
            token = page.next_token;
        }

        Ok(usernames)
    }
}
