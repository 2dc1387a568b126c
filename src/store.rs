//! Process-wide application state.
//!
//! Mirrors the store the platform's web client keeps: one slice per concern,
//! each written by exactly one component through a narrow setter API. Readers
//! get clones, never references into the lock.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::models::market::MarketTicker;
use crate::models::wallet::UserInfo;

/// Signed-in user profile. Written by the dashboard/transfer flows only.
pub struct UserSlice {
    inner: RwLock<Option<UserInfo>>,
}

impl UserSlice {
    fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    pub async fn set(&self, user: UserInfo) {
        *self.inner.write().await = Some(user);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn get(&self) -> Option<UserInfo> {
        self.inner.read().await.clone()
    }
}

/// Shared loading flag, toggled around every foreground fetch.
pub struct LoadingSlice {
    inner: AtomicBool,
}

impl LoadingSlice {
    fn new() -> Self {
        Self {
            inner: AtomicBool::new(false),
        }
    }

    pub fn set(&self, loading: bool) {
        self.inner.store(loading, Ordering::SeqCst);
    }

    pub fn is_loading(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}

/// Latest market tickers. Replaced wholesale on every refresh, never merged.
pub struct MarketSlice {
    inner: RwLock<Vec<MarketTicker>>,
}

impl MarketSlice {
    fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub async fn replace(&self, tickers: Vec<MarketTicker>) {
        *self.inner.write().await = tickers;
    }

    pub async fn snapshot(&self) -> Vec<MarketTicker> {
        self.inner.read().await.clone()
    }
}

pub struct AppStore {
    pub user: UserSlice,
    pub loading: LoadingSlice,
    pub market: MarketSlice,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            user: UserSlice::new(),
            loading: LoadingSlice::new(),
            market: MarketSlice::new(),
        }
    }
}

lazy_static! {
    pub static ref STORE: AppStore = AppStore::new();
}

/// Run a fetch with the loading flag raised, clearing it on both the success
/// and the failure path.
pub async fn with_loading<F, T, E>(store: &AppStore, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    store.loading.set(true);
    let result = fut.await;
    store.loading.set(false);
    result
}
