//! Board snapshot: configured columns holding ordered task sequences.

use super::{ColumnKey, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A single column and its ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    key: ColumnKey,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates a column holding the given tasks in order.
    #[must_use]
    pub const fn new(key: ColumnKey, tasks: Vec<Task>) -> Self {
        Self { key, tasks }
    }

    /// Creates an empty column.
    #[must_use]
    pub const fn empty(key: ColumnKey) -> Self {
        Self::new(key, Vec::new())
    }

    /// Returns the column key.
    #[must_use]
    pub const fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Returns the tasks in board order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the position of a task within this column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(crate) const fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }
}

/// Where a task currently sits on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskLocation {
    /// Column containing the task.
    pub column: ColumnKey,
    /// Position within that column.
    pub index: usize,
}

/// Consistent copy of every column, in configured enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates a board from columns listed in enumeration order.
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the columns in enumeration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given key.
    #[must_use]
    pub fn column(&self, key: &ColumnKey) -> Option<&Column> {
        self.columns.iter().find(|column| column.key() == key)
    }

    /// Returns the enumeration index of a column.
    #[must_use]
    pub fn column_index(&self, key: &ColumnKey) -> Option<usize> {
        self.columns.iter().position(|column| column.key() == key)
    }

    /// Returns the tasks of a column, or `None` for an unknown key.
    #[must_use]
    pub fn tasks(&self, key: &ColumnKey) -> Option<&[Task]> {
        self.column(key).map(Column::tasks)
    }

    /// Finds the column and position of a task.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<TaskLocation> {
        self.columns.iter().find_map(|column| {
            column.position_of(task_id).map(|index| TaskLocation {
                column: column.key().clone(),
                index,
            })
        })
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(Column::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns `true` when a task with this identifier exists.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.locate(task_id).is_some()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns the task identifiers of a column in order.
    ///
    /// Unknown columns yield an empty list.
    #[must_use]
    pub fn task_ids(&self, key: &ColumnKey) -> Vec<TaskId> {
        self.tasks(key)
            .map(|tasks| tasks.iter().map(|task| task.id().clone()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn column_mut(&mut self, key: &ColumnKey) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.key() == key)
    }

    pub(crate) fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}
