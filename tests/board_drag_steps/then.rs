//! Then steps for board drag BDD scenarios.

use super::world::BoardWorld;
use kanban_core::board::{
    domain::{ColumnKey, TaskId},
    services::DragOutcome,
};
use rstest_bdd_macros::then;
use tokio::sync::mpsc::error::TryRecvError;

fn column_ids(world: &BoardWorld, key: &str) -> Result<Vec<String>, eyre::Report> {
    let store = world
        .store
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board was never used"))?;
    let tasks = store
        .board()
        .tasks(&ColumnKey::new(key))
        .ok_or_else(|| eyre::eyre!("unknown column {key}"))?;
    Ok(tasks.iter().map(|task| task.id().to_string()).collect())
}

#[then(r#"column "{key}" holds "{ids}""#)]
fn column_holds(world: &BoardWorld, key: String, ids: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = ids.split(',').map(|id| id.trim().to_owned()).collect();
    let actual = column_ids(world, &key)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {key} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{key}" is empty"#)]
fn column_is_empty(world: &BoardWorld, key: String) -> Result<(), eyre::Report> {
    let actual = column_ids(world, &key)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!("expected column {key} to be empty, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{task}" reports column "{key}""#)]
fn task_reports_column(world: &BoardWorld, task: String, key: String) -> Result<(), eyre::Report> {
    let store = world
        .store
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board was never used"))?;
    let record = store
        .task(&TaskId::new(task.as_str()))
        .ok_or_else(|| eyre::eyre!("task {task} missing"))?;
    if record.column().as_str() != key {
        return Err(eyre::eyre!(
            "expected task {task} in column {key}, found {}",
            record.column()
        ));
    }
    Ok(())
}

#[then("no change events were emitted")]
fn no_change_events(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let events = world
        .events
        .as_mut()
        .ok_or_else(|| eyre::eyre!("board was never used"))?;
    match events.try_recv() {
        Err(TryRecvError::Empty) => Ok(()),
        other => Err(eyre::eyre!("expected no change events, got {other:?}")),
    }
}

#[then("the gesture was treated as a click")]
fn gesture_was_click(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.outcomes.last() {
        Some(DragOutcome::Clicked { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected a click outcome, got {other:?}")),
    }
}
