//! Domain model for the task board.
//!
//! The board domain holds task records, the column snapshot, change events and
//! the geometry exchanged with the renderer. Nothing here performs I/O.

mod board;
mod error;
mod event;
mod geometry;
mod ids;
mod seed;
mod task;

pub use board::{Board, Column, TaskLocation};
pub use error::{BoardError, TaskDraftError};
pub use event::BoardEvent;
pub use geometry::{DragGeometry, DropCandidate, DropTarget, Point, Rect, ResolvedTarget};
pub use ids::{ColumnKey, TaskId};
pub use seed::demo_board;
pub use task::{DEFAULT_ETA, DEFAULT_TAG, PersistedTaskData, Task, TaskDraft};
