//! Applies a resolved drop to the board store.

use super::store::{BoardResult, BoardStore};
use crate::board::domain::{BoardError, Column, ColumnKey, ResolvedTarget, TaskId, TaskLocation};
use tracing::debug;

/// A drop handed from the drag controller to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Dragged task.
    pub task_id: TaskId,
    /// Column the task was picked up from.
    pub source_column: ColumnKey,
    /// Target chosen by the collision resolver at drop time.
    pub target: ResolvedTarget,
}

impl MoveRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(task_id: TaskId, source_column: ColumnKey, target: ResolvedTarget) -> Self {
        Self {
            task_id,
            source_column,
            target,
        }
    }
}

/// Result of applying a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed position inside its column.
    Reordered {
        /// Column containing the task.
        column: ColumnKey,
        /// Position before the drop.
        from_index: usize,
        /// Position after the drop.
        to_index: usize,
    },
    /// The task changed column.
    Moved {
        /// Where the task was picked up.
        from: TaskLocation,
        /// Where the task landed.
        to: TaskLocation,
    },
    /// The task was dropped onto its own position.
    Unchanged,
    /// The task disappeared before the drop; nothing was applied.
    Abandoned {
        /// Task that could no longer be found.
        task_id: TaskId,
    },
}

/// Applies one drop. Never retries.
///
/// The task's live column is used as the source, so a drop still lands
/// correctly when a collaborator moved the task mid-gesture. A task that no
/// longer exists yields [`MoveOutcome::Abandoned`] rather than an error.
///
/// # Errors
///
/// Returns the store's [`BoardError`] for failures other than a missing task,
/// such as an unconfigured target column.
pub fn execute_move(store: &mut BoardStore, request: &MoveRequest) -> BoardResult<MoveOutcome> {
    let Some(current) = store.locate(&request.task_id) else {
        return Ok(abandoned(&request.task_id));
    };
    if current.column != request.source_column {
        debug!(
            task_id = %request.task_id,
            recorded = %request.source_column,
            actual = %current.column,
            "drag source is stale, using live column"
        );
    }

    if current.column == request.target.column {
        return reorder(store, current, request.target.index);
    }

    match store.move_across_columns(&request.task_id, &request.target.column, request.target.index)
    {
        Ok(to) => Ok(MoveOutcome::Moved { from: current, to }),
        Err(BoardError::TaskNotFound(task_id)) => Ok(abandoned(&task_id)),
        Err(err) => Err(err),
    }
}

fn reorder(
    store: &mut BoardStore,
    current: TaskLocation,
    slot_index: usize,
) -> BoardResult<MoveOutcome> {
    let len = store
        .board()
        .column(&current.column)
        .map_or(0, Column::len);
    let to_index = slot_index.min(len.saturating_sub(1));
    if to_index == current.index {
        return Ok(MoveOutcome::Unchanged);
    }
    store.reorder_within_column(&current.column, current.index, to_index)?;
    Ok(MoveOutcome::Reordered {
        column: current.column,
        from_index: current.index,
        to_index,
    })
}

fn abandoned(task_id: &TaskId) -> MoveOutcome {
    debug!(task_id = %task_id, "dragged task no longer exists, abandoning drop");
    MoveOutcome::Abandoned {
        task_id: task_id.clone(),
    }
}
