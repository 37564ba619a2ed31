//! Persistence port: seeds the board and records committed changes.

use crate::board::domain::{Board, BoardEvent};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board persistence operations.
pub type BoardPersistenceResult<T> = Result<T, BoardPersistenceError>;

/// Durable storage collaborator for the board.
///
/// The store never waits on this port before reflecting a change locally;
/// events reach it through [`crate::board::services::PersistenceRelay`].
#[async_trait]
pub trait BoardPersistence: Send + Sync {
    /// Loads the board snapshot used to seed the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Persistence`] when the backend cannot
    /// produce a snapshot.
    async fn load_board(&self) -> BoardPersistenceResult<Board>;

    /// Durably records one committed change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Persistence`] when the backend rejects
    /// the write.
    async fn record(&self, event: &BoardEvent) -> BoardPersistenceResult<()>;
}

/// Errors returned by persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardPersistenceError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardPersistenceError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
