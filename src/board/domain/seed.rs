//! Starter board used by demos and fixtures.

use super::{Board, Column, ColumnKey, PersistedTaskData, Task};

struct SeedTask {
    id: &'static str,
    title: &'static str,
    owner: &'static str,
    tag: &'static str,
    eta: &'static str,
}

const BACKLOG: [SeedTask; 2] = [
    SeedTask {
        id: "brief-agent",
        title: "Draft onboarding flow prompts",
        owner: "Jamie",
        tag: "Conversation Design",
        eta: "Due in 2d",
    },
    SeedTask {
        id: "persona-map",
        title: "Persona mapping workshop",
        owner: "Alex",
        tag: "Strategy",
        eta: "Due in 4d",
    },
];

const IN_PROGRESS: [SeedTask; 2] = [
    SeedTask {
        id: "voice-pack",
        title: "Fine-tune voice pack v2",
        owner: "Taylor",
        tag: "Model Ops",
        eta: "Today 16:30",
    },
    SeedTask {
        id: "demo-reel",
        title: "Render demo reel loops",
        owner: "Devon",
        tag: "Creative",
        eta: "In 6h",
    },
];

const REVIEW: [SeedTask; 1] = [SeedTask {
    id: "qa-audit",
    title: "Conversation QA audit",
    owner: "Morgan",
    tag: "Quality",
    eta: "Awaiting sign-off",
}];

const LAUNCH: [SeedTask; 1] = [SeedTask {
    id: "rollout-plan",
    title: "Rollout playbook + assets",
    owner: "Riley",
    tag: "Launch",
    eta: "Scheduled",
}];

fn column(key: &str, seeds: &[SeedTask]) -> Column {
    let column_key = ColumnKey::new(key);
    let tasks = seeds
        .iter()
        .map(|seed| {
            Task::from_persisted(PersistedTaskData {
                id: seed.id.into(),
                title: seed.title.to_owned(),
                owner: seed.owner.to_owned(),
                tag: seed.tag.to_owned(),
                eta: seed.eta.to_owned(),
                column: column_key.clone(),
            })
        })
        .collect();
    Column::new(column_key, tasks)
}

/// Returns the starter board for the default column configuration.
#[must_use]
pub fn demo_board() -> Board {
    Board::new(vec![
        column("backlog", &BACKLOG),
        column("inProgress", &IN_PROGRESS),
        column("review", &REVIEW),
        column("launch", &LAUNCH),
    ])
}
