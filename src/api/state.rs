//! Application state for the working-time API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::error::EngineResult;
use crate::store::{JsonFileStore, Ledger};

/// Shared application state.
///
/// Holds the ledger behind a single process-wide lock and, when the server
/// runs against a data file, the store every mutation is written through.
/// Reads go through [`AppState::ledger`]; every change goes through
/// [`AppState::transact`].
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<RwLock<Ledger>>,
    store: Option<Arc<JsonFileStore>>,
}

impl AppState {
    /// Creates an in-memory state; nothing is persisted.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            store: None,
        }
    }

    /// Creates a state that writes the ledger to `store` after each mutation.
    pub fn with_store(ledger: Ledger, store: JsonFileStore) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            store: Some(Arc::new(store)),
        }
    }

    /// Acquires shared access to the ledger.
    pub async fn ledger(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().await
    }

    /// Writes the ledger through the configured store, if any.
    fn persist(&self, ledger: &Ledger) -> EngineResult<()> {
        match &self.store {
            Some(store) => store.save(ledger),
            None => Ok(()),
        }
    }

    /// Applies `op` to a copy of the ledger, persists it, then makes it current.
    ///
    /// If `op` or the write fails the shared ledger is left unchanged.
    pub async fn transact<T>(&self, op: impl FnOnce(&mut Ledger) -> EngineResult<T>) -> EngineResult<T> {
        let mut ledger = self.ledger.write().await;
        let mut next = ledger.clone();
        let value = op(&mut next)?;
        self.persist(&next)?;
        *ledger = next;
        Ok(value)
    }
}
