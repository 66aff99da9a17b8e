use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::Result;
use shared::domain::{User, UserId};
use tokio::sync::RwLock;

use crate::UsersApi;

/// Last-fetched users, replaced wholesale on every successful fetch.
#[derive(Default)]
pub struct CollectionStore {
    users: RwLock<Vec<User>>,
    fetches_in_flight: Arc<AtomicUsize>,
}

/// Marks one fetch as in flight; loading ends when the last guard drops.
pub struct FetchGuard {
    fetches_in_flight: Arc<AtomicUsize>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.fetches_in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.fetches_in_flight.load(Ordering::Acquire) > 0
    }

    pub fn begin_fetch(&self) -> FetchGuard {
        self.fetches_in_flight.fetch_add(1, Ordering::AcqRel);
        FetchGuard {
            fetches_in_flight: Arc::clone(&self.fetches_in_flight),
        }
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn find(&self, id: UserId) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    pub async fn refresh<A: UsersApi + ?Sized>(&self, api: &A) -> Result<usize> {
        self.load(api, self.begin_fetch()).await
    }

    /// Fetches the full collection while `fetch` is held. The previous
    /// sequence survives any failure.
    pub async fn load<A: UsersApi + ?Sized>(&self, api: &A, fetch: FetchGuard) -> Result<usize> {
        let users = api.list_users().await?;
        let count = users.len();
        *self.users.write().await = users;
        drop(fetch);
        Ok(count)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
