//! Unit tests for the board module.


use crate::board::{
    config::{BoardConfig, ColumnDefinition},
    domain::{Board, Column, ColumnKey, PersistedTaskData, Task, TaskId},
    services::BoardStore,
};

/// Two-column configuration used by most scenarios.
pub(super) fn two_column_config() -> BoardConfig {
    BoardConfig::new(vec![
        ColumnDefinition::new("backlog", "Intake", "# PLAN"),
        ColumnDefinition::new("launch", "Ready to Ship", "# LAUNCH"),
    ])
    .expect("two-column configuration is valid")
}

pub(super) fn task(id: &str, column: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: id.into(),
        title: format!("Task {id}"),
        owner: "Riley".to_owned(),
        tag: "Test".to_owned(),
        eta: "Soon".to_owned(),
        column: column.into(),
    })
}

pub(super) fn column(key: &str, ids: &[&str]) -> Column {
    column_with_tasks(key, ids.iter().map(|id| task(id, key)).collect())
}

pub(super) fn column_with_tasks(key: &str, tasks: Vec<Task>) -> Column {
    Column::new(ColumnKey::new(key), tasks)
}

/// Builds a store over the two-column configuration.
pub(super) fn store_with(backlog: &[&str], launch: &[&str]) -> Result<BoardStore, eyre::Report> {
    let snapshot = Board::new(vec![column("backlog", backlog), column("launch", launch)]);
    Ok(BoardStore::from_snapshot(two_column_config(), snapshot)?)
}

pub(super) fn ids(store: &BoardStore, key: &str) -> Vec<TaskId> {
    store.board().task_ids(&ColumnKey::new(key))
}

pub(super) fn id_list(values: &[&str]) -> Vec<TaskId> {
    values.iter().copied().map(TaskId::from).collect()
}

/// Asserts every task's `column` matches the list that holds it and that no
/// identifier appears twice.
pub(super) fn assert_consistent(board: &Board) -> Result<(), eyre::Report> {
    let mut seen = std::collections::HashSet::new();
    for column in board.columns() {
        for task in column.tasks() {
            eyre::ensure!(
                task.column() == column.key(),
                "task {} reports column {} but lives in {}",
                task.id(),
                task.column(),
                column.key()
            );
            eyre::ensure!(seen.insert(task.id().clone()), "duplicate task {}", task.id());
        }
    }
    Ok(())
}
