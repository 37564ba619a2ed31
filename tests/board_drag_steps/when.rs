//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, CARD_HEIGHT, CARD_WIDTH, SLOT_SPACING, column_left, layout};
use kanban_core::board::{
    domain::{ColumnKey, Point, Rect, TaskId},
    services::{CancelReason, PointerEvent, PointerTarget},
};
use rstest_bdd_macros::when;

/// Presses the pointer on the centre of a task card.
fn press(world: &mut BoardWorld, task: &str) -> Result<Point, eyre::Report> {
    let task_id = TaskId::new(task);
    let store = world.store()?;
    let location = store
        .locate(&task_id)
        .ok_or_else(|| eyre::eyre!("task {task} is not on the board"))?;
    let left = column_left(store.board(), &location.column)?;
    let top = f64::from(u32::try_from(location.index)?) * SLOT_SPACING;
    let start = Point::new(left + CARD_WIDTH / 2.0, top + CARD_HEIGHT / 2.0);
    let outcome = world.controller.handle(
        world
            .store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("store missing"))?,
        PointerEvent::Down {
            target: PointerTarget::Task(task_id),
            position: start,
        },
    );
    world.outcomes.push(outcome);
    Ok(start)
}

/// Moves the dragged card so its top-left corner sits at `(left, top)`.
fn drag_card_to(world: &mut BoardWorld, left: f64, top: f64) -> Result<Point, eyre::Report> {
    let position = Point::new(left + CARD_WIDTH / 2.0, top + CARD_HEIGHT / 2.0);
    let store = world
        .store
        .as_mut()
        .ok_or_else(|| eyre::eyre!("store missing"))?;
    let geometry = layout(store.board(), Rect::new(left, top, CARD_WIDTH, CARD_HEIGHT));
    let outcome = world
        .controller
        .handle(store, PointerEvent::Move { position, geometry });
    world.outcomes.push(outcome);
    Ok(position)
}

fn release(world: &mut BoardWorld, position: Point) -> Result<(), eyre::Report> {
    let store = world
        .store
        .as_mut()
        .ok_or_else(|| eyre::eyre!("store missing"))?;
    let outcome = world.controller.handle(store, PointerEvent::Up { position });
    world.outcomes.push(outcome);
    Ok(())
}

#[when(r#"task "{task}" is dragged onto the empty "{target}" column"#)]
fn drag_onto_empty_column(
    world: &mut BoardWorld,
    task: String,
    target: String,
) -> Result<(), eyre::Report> {
    press(world, &task)?;
    let left = column_left(world.store()?.board(), &ColumnKey::new(target))?;
    let position = drag_card_to(world, left + 5.0, 10.0)?;
    release(world, position)
}

#[when(r#"column "{key}" is reordered from {from:usize} to {to:usize}"#)]
fn reorder_column(
    world: &mut BoardWorld,
    key: String,
    from: usize,
    to: usize,
) -> Result<(), eyre::Report> {
    world
        .store()?
        .reorder_within_column(&ColumnKey::new(key), from, to)?;
    Ok(())
}

#[when(r#"task "{task}" is dragged past the threshold and then cancelled"#)]
fn drag_then_cancel(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    press(world, &task)?;
    drag_card_to(world, 300.0, 10.0)?;
    let store = world
        .store
        .as_mut()
        .ok_or_else(|| eyre::eyre!("store missing"))?;
    let outcome = world.controller.handle(
        store,
        PointerEvent::Cancel {
            reason: CancelReason::PointerCancel,
        },
    );
    world.outcomes.push(outcome);
    Ok(())
}

#[when(r#"task "{task}" is pressed and released without passing the threshold"#)]
fn press_and_release(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let start = press(world, &task)?;
    release(world, Point::new(start.x + 3.0, start.y + 4.0))
}
