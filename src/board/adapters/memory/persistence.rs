//! In-memory persistence for board tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardEvent},
    ports::{BoardPersistence, BoardPersistenceError, BoardPersistenceResult},
};

/// Thread-safe in-memory board persistence.
///
/// Serves a fixed seed snapshot and keeps every recorded event in arrival
/// order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardPersistence {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    seed: Board,
    events: Vec<BoardEvent>,
}

impl InMemoryBoardPersistence {
    /// Creates persistence that seeds an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates persistence that seeds the given snapshot.
    #[must_use]
    pub fn with_seed(seed: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState {
                seed,
                events: Vec::new(),
            })),
        }
    }

    /// Returns the events recorded so far.
    ///
    /// # Errors
    ///
    /// Returns [`BoardPersistenceError::Persistence`] when the state lock is
    /// poisoned.
    pub fn recorded_events(&self) -> BoardPersistenceResult<Vec<BoardEvent>> {
        let state = self.state.read().map_err(|err| {
            BoardPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.events.clone())
    }
}

#[async_trait]
impl BoardPersistence for InMemoryBoardPersistence {
    async fn load_board(&self) -> BoardPersistenceResult<Board> {
        let state = self.state.read().map_err(|err| {
            BoardPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.seed.clone())
    }

    async fn record(&self, event: &BoardEvent) -> BoardPersistenceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardPersistenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.events.push(event.clone());
        Ok(())
    }
}
