//! Change events published after each committed board mutation.

use super::{ColumnKey, TaskId};
use serde::{Deserialize, Serialize};

/// A committed board mutation.
///
/// Each variant carries enough positional data for a collaborator to patch
/// its own view without re-reading the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A task was appended to a column.
    TaskAdded {
        /// New task identifier.
        task_id: TaskId,
        /// Column receiving the task.
        column: ColumnKey,
        /// Position of the task after the append.
        index: usize,
    },
    /// A task changed position inside its column.
    TaskReordered {
        /// Reordered task.
        task_id: TaskId,
        /// Column containing the task.
        column: ColumnKey,
        /// Position before the reorder.
        from_index: usize,
        /// Position after the reorder.
        to_index: usize,
    },
    /// A task moved to another column.
    TaskMoved {
        /// Moved task.
        task_id: TaskId,
        /// Column the task left.
        from_column: ColumnKey,
        /// Position in the source column before the move.
        from_index: usize,
        /// Column the task joined.
        to_column: ColumnKey,
        /// Position in the target column after the move.
        to_index: usize,
    },
    /// A task was deleted.
    TaskRemoved {
        /// Removed task.
        task_id: TaskId,
        /// Column that held the task.
        column: ColumnKey,
        /// Position the task occupied.
        index: usize,
    },
}

impl BoardEvent {
    /// Returns the task the event concerns.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        match self {
            Self::TaskAdded { task_id, .. }
            | Self::TaskReordered { task_id, .. }
            | Self::TaskMoved { task_id, .. }
            | Self::TaskRemoved { task_id, .. } => task_id,
        }
    }

    /// Returns the event name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TaskAdded { .. } => "task_added",
            Self::TaskReordered { .. } => "task_reordered",
            Self::TaskMoved { .. } => "task_moved",
            Self::TaskRemoved { .. } => "task_removed",
        }
    }
}
