//! Given steps for board drag BDD scenarios.

use super::world::BoardWorld;
use kanban_core::board::domain::{Column, ColumnKey, PersistedTaskData, Task};
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{first}" and "{second}""#)]
fn board_with_columns(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world.configure(&[first.as_str(), second.as_str()])
}

#[given(r#"column "{key}" holds "{ids}""#)]
fn column_holds(world: &mut BoardWorld, key: String, ids: String) -> Result<(), eyre::Report> {
    if world.store.is_some() {
        return Err(eyre::eyre!("columns must be seeded before the board is used"));
    }
    let column_key = ColumnKey::new(key);
    let tasks = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            Task::from_persisted(PersistedTaskData {
                id: id.into(),
                title: format!("Task {id}"),
                owner: "Jamie".to_owned(),
                tag: "Scenario".to_owned(),
                eta: "Today".to_owned(),
                column: column_key.clone(),
            })
        })
        .collect();
    world.seed_columns.push(Column::new(column_key, tasks));
    Ok(())
}
