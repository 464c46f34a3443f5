//! Per-teammate advisory locks.
//!
//! Grant and revoke read the teammate's scope list and write back the whole
//! list; upstream offers no version token. Holding the username's lock
//! across that pair serializes writers within this process. Writers in
//! other processes can still race.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct TeammateLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl TeammateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `username`.
    ///
    /// Entries that no caller holds or waits on are dropped first, so the map
    /// only tracks usernames with work in flight.
    pub async fn lock(&self, username: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(username.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of usernames currently tracked.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
