//! Board store: the single owner of board state.
//!
//! Every mutation validates its inputs before the first write, so a failed
//! call leaves the board untouched. Successful mutations publish one
//! [`BoardEvent`] to every live subscriber.

use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardError, BoardEvent, Column, ColumnKey, Task, TaskDraft, TaskId, TaskLocation,
    },
};
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Result type for board store operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// In-memory board with invariant-checked mutations.
#[derive(Debug)]
pub struct BoardStore {
    config: BoardConfig,
    board: Board,
    next_id: u64,
    subscribers: Vec<UnboundedSender<BoardEvent>>,
}

impl BoardStore {
    /// Creates a store with every configured column empty.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let board = config.empty_board();
        Self {
            config,
            board,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Seeds a store from a collaborator snapshot.
    ///
    /// Columns are laid out in configuration order, configured columns absent
    /// from the snapshot start empty, and each task's `column` is rewritten
    /// to match the list that holds it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the snapshot names a column
    /// outside the configuration and [`BoardError::DuplicateTask`] when a task
    /// identifier appears more than once.
    pub fn from_snapshot(config: BoardConfig, snapshot: Board) -> BoardResult<Self> {
        let mut seen = HashSet::new();
        let mut incoming: HashMap<ColumnKey, Vec<Task>> = HashMap::new();
        for column in snapshot.into_columns() {
            if !config.contains(column.key()) {
                return Err(BoardError::UnknownColumn(column.key().clone()));
            }
            let key = column.key().clone();
            let mut column_tasks = column;
            for task in column_tasks.tasks() {
                if !seen.insert(task.id().clone()) {
                    return Err(BoardError::DuplicateTask(task.id().clone()));
                }
            }
            incoming
                .entry(key)
                .or_default()
                .append(column_tasks.tasks_mut());
        }

        let mut store = Self::new(config);
        for column in store.config.columns() {
            let Some(tasks) = incoming.remove(&column.key) else {
                continue;
            };
            if let Some(target) = store.board.column_mut(&column.key) {
                for mut task in tasks {
                    task.relocate(column.key.clone());
                    target.tasks_mut().push(task);
                }
            }
        }
        tracing::info!(
            tasks = store.board.task_count(),
            columns = store.board.columns().len(),
            "seeded board store"
        );
        Ok(store)
    }

    /// Returns the configuration the store was built with.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns a borrowed view of the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a consistent copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.board.task(task_id)
    }

    /// Finds the column and position of a task.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<TaskLocation> {
        self.board.locate(task_id)
    }

    /// Opens a change-event subscription.
    ///
    /// Events are delivered in commit order. Dropping the receiver ends the
    /// subscription.
    pub fn subscribe(&mut self) -> UnboundedReceiver<BoardEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Appends a new task to the end of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when the column is not
    /// configured.
    pub fn add_task(&mut self, column: &ColumnKey, draft: TaskDraft) -> BoardResult<TaskId> {
        if !self.config.contains(column) {
            return Err(BoardError::UnknownColumn(column.clone()));
        }
        let task_id = self.allocate_id();
        let target = self
            .board
            .column_mut(column)
            .ok_or_else(|| BoardError::UnknownColumn(column.clone()))?;
        let index = target.len();
        target
            .tasks_mut()
            .push(Task::from_draft(task_id.clone(), draft, column.clone()));

        self.publish(BoardEvent::TaskAdded {
            task_id: task_id.clone(),
            column: column.clone(),
            index,
        });
        Ok(task_id)
    }

    /// Moves the task at `from_index` to `to_index` within one column.
    ///
    /// Intervening tasks shift by one position. Equal indices succeed without
    /// touching the column or publishing an event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] for an unconfigured column and
    /// [`BoardError::IndexOutOfRange`] when either index is not below the
    /// column length.
    pub fn reorder_within_column(
        &mut self,
        column: &ColumnKey,
        from_index: usize,
        to_index: usize,
    ) -> BoardResult<()> {
        let target = self
            .board
            .column_mut(column)
            .ok_or_else(|| BoardError::UnknownColumn(column.clone()))?;
        let len = target.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(BoardError::IndexOutOfRange {
                    column: column.clone(),
                    index,
                    len,
                });
            }
        }
        if from_index == to_index {
            return Ok(());
        }

        let tasks = target.tasks_mut();
        let task = tasks.remove(from_index);
        let task_id = task.id().clone();
        tasks.insert(to_index, task);

        self.publish(BoardEvent::TaskReordered {
            task_id,
            column: column.clone(),
            from_index,
            to_index,
        });
        Ok(())
    }

    /// Moves a task into a different column at `insertion_index`.
    ///
    /// The index is clamped to `[0, target length]`. Returns where the task
    /// landed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown task,
    /// [`BoardError::UnknownColumn`] for an unconfigured target, and
    /// [`BoardError::SameColumn`] when the task already lives in the target
    /// column.
    pub fn move_across_columns(
        &mut self,
        task_id: &TaskId,
        target_column: &ColumnKey,
        insertion_index: usize,
    ) -> BoardResult<TaskLocation> {
        let source = self
            .board
            .locate(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;
        let target_len = self
            .board
            .column(target_column)
            .map(Column::len)
            .ok_or_else(|| BoardError::UnknownColumn(target_column.clone()))?;
        if &source.column == target_column {
            return Err(BoardError::SameColumn {
                task_id: task_id.clone(),
                column: source.column,
            });
        }
        let index = insertion_index.min(target_len);

        let mut task = self
            .board
            .column_mut(&source.column)
            .map(|column| column.tasks_mut().remove(source.index))
            .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;
        task.relocate(target_column.clone());
        match self.board.column_mut(target_column) {
            Some(column) => column.tasks_mut().insert(index, task),
            None => {
                self.restore(&source, task);
                return Err(BoardError::UnknownColumn(target_column.clone()));
            }
        }

        self.publish(BoardEvent::TaskMoved {
            task_id: task_id.clone(),
            from_column: source.column,
            from_index: source.index,
            to_column: target_column.clone(),
            to_index: index,
        });
        Ok(TaskLocation {
            column: target_column.clone(),
            index,
        })
    }

    /// Deletes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when the task does not exist.
    pub fn remove_task(&mut self, task_id: &TaskId) -> BoardResult<Task> {
        let location = self
            .board
            .locate(task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;
        let task = self
            .board
            .column_mut(&location.column)
            .map(|column| column.tasks_mut().remove(location.index))
            .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;

        self.publish(BoardEvent::TaskRemoved {
            task_id: task_id.clone(),
            column: location.column,
            index: location.index,
        });
        Ok(task)
    }

    /// Puts a task back where it was taken from.
    fn restore(&mut self, location: &TaskLocation, mut task: Task) {
        task.relocate(location.column.clone());
        if let Some(column) = self.board.column_mut(&location.column) {
            column.tasks_mut().insert(location.index, task);
        }
    }

    /// Allocates the next unused `task-N` identifier.
    fn allocate_id(&mut self) -> TaskId {
        loop {
            self.next_id += 1;
            let candidate = TaskId::new(format!("task-{}", self.next_id));
            if !self.board.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn publish(&mut self, event: BoardEvent) {
        debug!(kind = event.kind(), task_id = %event.task_id(), "board mutation committed");
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
