//! Pointer and layout geometry supplied by the rendering collaborator.

use super::ColumnKey;
use serde::{Deserialize, Serialize};

/// A point in the renderer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width, non-negative.
    pub width: f64,
    /// Height, non-negative.
    pub height: f64,
}

impl Rect {
    /// Creates a bounding box from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the box moved by the given offset.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Corners in a fixed order: top-left, top-right, bottom-left,
    /// bottom-right.
    #[must_use]
    pub fn corners(self) -> [Point; 4] {
        let right = self.left + self.width;
        let bottom = self.top + self.height;
        [
            Point::new(self.left, self.top),
            Point::new(right, self.top),
            Point::new(self.left, bottom),
            Point::new(right, bottom),
        ]
    }

    /// Sum of distances between corresponding corners of two boxes.
    #[must_use]
    pub fn corner_distance(self, other: Self) -> f64 {
        self.corners()
            .into_iter()
            .zip(other.corners())
            .map(|(mine, theirs)| mine.distance_to(theirs))
            .sum()
    }
}

/// What a droppable region stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// The container of a whole column.
    Column {
        /// Column owning the container.
        column: ColumnKey,
    },
    /// The slot currently occupied by a task.
    Slot {
        /// Column owning the slot.
        column: ColumnKey,
        /// Position of the slot within the column.
        index: usize,
    },
}

impl DropTarget {
    /// Returns the column the region belongs to.
    #[must_use]
    pub const fn column(&self) -> &ColumnKey {
        match self {
            Self::Column { column } | Self::Slot { column, .. } => column,
        }
    }
}

/// A droppable region and its current bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropCandidate {
    /// Region identity.
    pub target: DropTarget,
    /// Region bounds.
    pub rect: Rect,
}

impl DropCandidate {
    /// Creates a column container candidate.
    #[must_use]
    pub fn column(column: impl Into<ColumnKey>, rect: Rect) -> Self {
        Self {
            target: DropTarget::Column {
                column: column.into(),
            },
            rect,
        }
    }

    /// Creates a task slot candidate.
    #[must_use]
    pub fn slot(column: impl Into<ColumnKey>, index: usize, rect: Rect) -> Self {
        Self {
            target: DropTarget::Slot {
                column: column.into(),
                index,
            },
            rect,
        }
    }
}

/// Layout snapshot sent with each pointer move during a drag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragGeometry {
    /// Current bounds of the dragged card.
    pub active: Rect,
    /// Every droppable region the renderer knows about.
    pub candidates: Vec<DropCandidate>,
}

impl DragGeometry {
    /// Creates a layout snapshot.
    #[must_use]
    pub const fn new(active: Rect, candidates: Vec<DropCandidate>) -> Self {
        Self { active, candidates }
    }
}

/// Drop target chosen by the collision resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// Column that would receive the task.
    pub column: ColumnKey,
    /// Position the task would occupy in that column.
    pub index: usize,
}

impl ResolvedTarget {
    /// Creates a resolved target.
    #[must_use]
    pub fn new(column: impl Into<ColumnKey>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}
