//! Forwards committed board events to the persistence collaborator.

use crate::board::{domain::BoardEvent, ports::BoardPersistence};
use std::sync::Arc;
use tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle};
use tracing::warn;

/// Counts of events handled by a relay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayReport {
    /// Events the collaborator accepted.
    pub recorded: usize,
    /// Events the collaborator rejected.
    pub failed: usize,
}

/// Drains a store subscription into a [`BoardPersistence`] implementation.
///
/// Local board state never waits on the relay. A rejected write is logged
/// and skipped; it does not roll back the board.
#[derive(Debug)]
pub struct PersistenceRelay<P>
where
    P: BoardPersistence,
{
    persistence: Arc<P>,
}

impl<P> PersistenceRelay<P>
where
    P: BoardPersistence + 'static,
{
    /// Creates a relay for the given collaborator.
    #[must_use]
    pub const fn new(persistence: Arc<P>) -> Self {
        Self { persistence }
    }

    /// Forwards events until every sender is dropped.
    pub async fn run(&self, mut events: UnboundedReceiver<BoardEvent>) -> RelayReport {
        let mut report = RelayReport::default();
        while let Some(event) = events.recv().await {
            match self.persistence.record(&event).await {
                Ok(()) => report.recorded += 1,
                Err(err) => {
                    warn!(
                        kind = event.kind(),
                        task_id = %event.task_id(),
                        error = %err,
                        "failed to persist board event"
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Runs the relay on the current `tokio` runtime.
    ///
    /// Must be called from within a runtime context.
    #[must_use]
    pub fn spawn(self, events: UnboundedReceiver<BoardEvent>) -> JoinHandle<RelayReport> {
        tokio::spawn(async move { self.run(events).await })
    }
}
