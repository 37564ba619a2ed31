//! Error types for board mutations and task drafts.

use super::{ColumnKey, TaskId};
use thiserror::Error;

/// Errors returned by board store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The column key is not part of the configured enumeration.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnKey),

    /// An index lies outside the current bounds of a column.
    #[error("index {index} out of range for column {column} of length {len}")]
    IndexOutOfRange {
        /// Column the index was applied to.
        column: ColumnKey,
        /// Offending index.
        index: usize,
        /// Column length at the time of the call.
        len: usize,
    },

    /// The task no longer exists on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A cross-column move named the task's current column.
    #[error("task {task_id} already belongs to column {column}; reorder it instead")]
    SameColumn {
        /// Task that was asked to move.
        task_id: TaskId,
        /// Column the task already belongs to.
        column: ColumnKey,
    },

    /// A seed snapshot listed the same task more than once.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Errors returned while building a task draft.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskDraftError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The owner is empty after trimming.
    #[error("task owner must not be empty")]
    EmptyOwner,
}
