//! Seeds a board store from the persistence collaborator and wires the relay.

use super::{
    relay::{PersistenceRelay, RelayReport},
    store::BoardStore,
};
use crate::board::{
    config::BoardConfig,
    domain::BoardError,
    ports::{BoardPersistence, BoardPersistenceError},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Errors returned while bootstrapping a board session.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The collaborator could not produce a seed snapshot.
    #[error(transparent)]
    Persistence(#[from] BoardPersistenceError),
    /// The seed snapshot violates the board invariants.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A seeded store plus the task relaying its events to persistence.
#[derive(Debug)]
pub struct BoardSession {
    /// The seeded store.
    pub store: BoardStore,
    /// Relay task; completes once the store is dropped.
    pub relay: JoinHandle<RelayReport>,
}

/// Loads the seed snapshot, builds the store and starts the relay.
///
/// Must be called from within a `tokio` runtime.
///
/// # Errors
///
/// Returns [`BootstrapError`] when loading fails or the snapshot is invalid.
pub async fn bootstrap<P>(
    config: BoardConfig,
    persistence: Arc<P>,
) -> Result<BoardSession, BootstrapError>
where
    P: BoardPersistence + 'static,
{
    let snapshot = persistence.load_board().await?;
    let mut store = BoardStore::from_snapshot(config, snapshot)?;
    let events = store.subscribe();
    let relay = PersistenceRelay::new(persistence).spawn(events);
    Ok(BoardSession { store, relay })
}
