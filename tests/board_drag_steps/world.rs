//! Shared world state for board drag BDD scenarios.

use kanban_core::board::{
    config::{BoardConfig, ColumnDefinition},
    domain::{Board, BoardEvent, Column, ColumnKey, DragGeometry, DropCandidate, Rect},
    services::{BoardStore, DragController, DragOutcome},
};
use rstest::fixture;
use tokio::sync::mpsc::UnboundedReceiver;

/// Horizontal distance between column origins in the scenario layout.
pub const COLUMN_SPACING: f64 = 300.0;
/// Vertical distance between card origins in the scenario layout.
pub const SLOT_SPACING: f64 = 100.0;
/// Card width in the scenario layout.
pub const CARD_WIDTH: f64 = 200.0;
/// Card height in the scenario layout.
pub const CARD_HEIGHT: f64 = 80.0;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub config: Option<BoardConfig>,
    pub seed_columns: Vec<Column>,
    pub store: Option<BoardStore>,
    pub events: Option<UnboundedReceiver<BoardEvent>>,
    pub controller: DragController,
    pub outcomes: Vec<DragOutcome>,
}

impl BoardWorld {
    /// Creates a world with no board configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            seed_columns: Vec::new(),
            store: None,
            events: None,
            controller: DragController::from_config(&BoardConfig::default()),
            outcomes: Vec::new(),
        }
    }

    /// Configures the board columns.
    pub fn configure(&mut self, keys: &[&str]) -> Result<(), eyre::Report> {
        let definitions = keys
            .iter()
            .map(|key| ColumnDefinition::new(*key, *key, ""))
            .collect();
        self.config = Some(BoardConfig::new(definitions)?);
        Ok(())
    }

    /// Builds the store on first use and subscribes to its events.
    pub fn store(&mut self) -> Result<&mut BoardStore, eyre::Report> {
        if self.store.is_none() {
            let config = self
                .config
                .clone()
                .ok_or_else(|| eyre::eyre!("board columns were not configured"))?;
            let snapshot = Board::new(std::mem::take(&mut self.seed_columns));
            let mut store = BoardStore::from_snapshot(config, snapshot)?;
            self.events = Some(store.subscribe());
            self.store = Some(store);
        }
        self.store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("store missing after construction"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Lays out every column side by side with cards stacked from the top.
pub fn layout(board: &Board, active: Rect) -> DragGeometry {
    let mut candidates = Vec::new();
    let mut left = 0.0;
    for column in board.columns() {
        candidates.push(DropCandidate::column(
            column.key().clone(),
            Rect::new(left, 0.0, CARD_WIDTH, 4.0 * SLOT_SPACING),
        ));
        let mut top = 0.0;
        for index in 0..column.len() {
            candidates.push(DropCandidate::slot(
                column.key().clone(),
                index,
                Rect::new(left, top, CARD_WIDTH, CARD_HEIGHT),
            ));
            top += SLOT_SPACING;
        }
        left += COLUMN_SPACING;
    }
    DragGeometry::new(active, candidates)
}

/// Returns the left edge of a column in the scenario layout.
pub fn column_left(board: &Board, key: &ColumnKey) -> Result<f64, eyre::Report> {
    let position = board
        .column_index(key)
        .ok_or_else(|| eyre::eyre!("unknown column {key}"))?;
    Ok(f64::from(u32::try_from(position)?) * COLUMN_SPACING)
}
