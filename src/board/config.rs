//! Board configuration: the closed column enumeration and drag tuning.
//!
//! Configuration is a JSON document. A representative payload is:
//!
//! ```json
//! {
//!   "columns": [
//!     { "key": "backlog", "title": "Intake", "code": "# PLAN" },
//!     { "key": "launch", "title": "Ready to Ship", "code": "# LAUNCH" }
//!   ],
//!   "activation_distance": 10.0
//! }
//! ```

use crate::board::domain::{Board, Column, ColumnKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use thiserror::Error;

/// Distance a pointer must travel before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 10.0;

/// Errors returned while loading or validating a board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse board configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration lists no columns.
    #[error("board configuration must declare at least one column")]
    NoColumns,

    /// A column key is empty after trimming.
    #[error("column keys must not be blank")]
    BlankColumnKey,

    /// Two columns share a key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(ColumnKey),

    /// The activation distance is negative or not finite.
    #[error("activation distance must be a finite, non-negative number, got {0}")]
    InvalidActivationDistance(f64),
}

/// Display metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column key used by tasks and events.
    pub key: ColumnKey,
    /// Human readable heading.
    pub title: String,
    /// Short badge shown beside the heading.
    #[serde(default)]
    pub code: String,
}

impl ColumnDefinition {
    /// Creates a column definition.
    #[must_use]
    pub fn new(key: impl Into<ColumnKey>, title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            code: code.into(),
        }
    }
}

/// Validated board configuration.
///
/// Deserialising goes through the same validation as [`BoardConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    columns: Vec<ColumnDefinition>,
    activation_distance: f64,
}

/// Configuration document as written, before validation.
#[derive(Debug, Deserialize)]
struct RawBoardConfig {
    columns: Vec<ColumnDefinition>,
    #[serde(default = "default_activation_distance")]
    activation_distance: f64,
}

const fn default_activation_distance() -> f64 {
    DEFAULT_ACTIVATION_DISTANCE
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        let config = Self {
            columns: raw.columns,
            activation_distance: raw.activation_distance,
        };
        config.validate()?;
        Ok(config)
    }
}

impl BoardConfig {
    /// Creates a configuration from column definitions in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardConfigError`] when the columns are empty, blank, or
    /// duplicated.
    pub fn new(columns: Vec<ColumnDefinition>) -> Result<Self, BoardConfigError> {
        let config = Self {
            columns,
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides the drag activation distance.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::InvalidActivationDistance`] for a negative
    /// or non-finite distance.
    pub fn with_activation_distance(mut self, distance: f64) -> Result<Self, BoardConfigError> {
        self.activation_distance = distance;
        self.validate()?;
        Ok(self)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed JSON and the other
    /// variants when validation fails.
    pub fn from_json(json: &str) -> Result<Self, BoardConfigError> {
        let raw: RawBoardConfig = serde_json::from_str(json).map_err(BoardConfigError::Parse)?;
        Self::try_from(raw)
    }

    /// Reads, parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] when reading or parsing fails and
    /// the other variants when validation fails.
    pub fn from_reader(reader: impl Read) -> Result<Self, BoardConfigError> {
        let raw: RawBoardConfig =
            serde_json::from_reader(reader).map_err(BoardConfigError::Parse)?;
        Self::try_from(raw)
    }

    fn validate(&self) -> Result<(), BoardConfigError> {
        if self.columns.is_empty() {
            return Err(BoardConfigError::NoColumns);
        }
        let mut seen = HashSet::with_capacity(self.columns.len());
        for definition in &self.columns {
            if definition.key.as_str().trim().is_empty() {
                return Err(BoardConfigError::BlankColumnKey);
            }
            if !seen.insert(&definition.key) {
                return Err(BoardConfigError::DuplicateColumn(definition.key.clone()));
            }
        }
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(BoardConfigError::InvalidActivationDistance(
                self.activation_distance,
            ));
        }
        Ok(())
    }

    /// Returns the column definitions in enumeration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Returns the definition of a column.
    #[must_use]
    pub fn column(&self, key: &ColumnKey) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|definition| &definition.key == key)
    }

    /// Returns `true` when the key belongs to the enumeration.
    #[must_use]
    pub fn contains(&self, key: &ColumnKey) -> bool {
        self.column(key).is_some()
    }

    /// Returns the enumeration index of a column.
    #[must_use]
    pub fn column_index(&self, key: &ColumnKey) -> Option<usize> {
        self.columns
            .iter()
            .position(|definition| &definition.key == key)
    }

    /// Returns the drag activation distance.
    #[must_use]
    pub const fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    /// Returns an empty board with every configured column.
    #[must_use]
    pub fn empty_board(&self) -> Board {
        Board::new(
            self.columns
                .iter()
                .map(|definition| Column::empty(definition.key.clone()))
                .collect(),
        )
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnDefinition::new("backlog", "Intake", "# PLAN"),
                ColumnDefinition::new("inProgress", "In Build", "# BUILD"),
                ColumnDefinition::new("review", "QA Review", "# REVIEW"),
                ColumnDefinition::new("launch", "Ready to Ship", "# LAUNCH"),
            ],
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}
