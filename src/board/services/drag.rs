//! Drag session controller.
//!
//! Turns raw pointer events into a validated drag lifecycle:
//!
//! ```text
//! Idle --down on task--> Armed --move past threshold--> Dragging
//!   ^                      |                               |
//!   +---- up (click) ------+                               |
//!   +---- cancel ----------+-------------------------------+
//!   +---- up (drop, executes the move) --------------------+
//! ```
//!
//! The board is only written when a drag ends with a pointer-up over a
//! resolved target. Cancelling at any stage leaves it untouched.

use super::{
    executor::{MoveOutcome, MoveRequest, execute_move},
    resolver::closest_corners,
    store::BoardStore,
};
use crate::board::{
    config::BoardConfig,
    domain::{Board, BoardError, ColumnKey, DragGeometry, Point, ResolvedTarget, Task, TaskId},
};
use tracing::{debug, warn};

/// What the pointer was over when it was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// A task card.
    Task(TaskId),
    /// The background of a column container.
    Column(ColumnKey),
}

/// Why a gesture was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The platform cancelled the pointer, for example on focus loss.
    PointerCancel,
    /// The user or a collaborator explicitly aborted the gesture.
    Gesture,
}

/// Pointer input forwarded by the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down {
        /// Element under the pointer.
        target: PointerTarget,
        /// Pointer position.
        position: Point,
    },
    /// Pointer moved while pressed.
    Move {
        /// Pointer position.
        position: Point,
        /// Current layout of the dragged card and droppables.
        geometry: DragGeometry,
    },
    /// Pointer released.
    Up {
        /// Pointer position.
        position: Point,
    },
    /// Gesture cancelled.
    Cancel {
        /// Cancellation cause.
        reason: CancelReason,
    },
}

/// Where a drag started.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOrigin {
    /// Task under the pointer at press time.
    pub task_id: TaskId,
    /// Column holding the task at press time.
    pub column: ColumnKey,
    /// Position of the task at press time.
    pub index: usize,
    /// Pointer position at press time.
    pub start: Point,
}

/// Coarse lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in flight.
    Idle,
    /// Pointer pressed on a task but not yet past the activation distance.
    Armed,
    /// Drag in progress.
    Dragging,
}

/// Result of handling one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The event does not apply to the current phase.
    Ignored,
    /// A press on a task armed a gesture.
    Armed(DragOrigin),
    /// The pointer crossed the activation distance.
    Started {
        /// Where the drag began.
        origin: DragOrigin,
        /// Target resolved from the move that started the drag.
        target: Option<ResolvedTarget>,
    },
    /// The resolved target was recomputed during a drag.
    TargetUpdated(Option<ResolvedTarget>),
    /// A press and release below the activation distance.
    Clicked {
        /// Task that was clicked.
        task_id: TaskId,
    },
    /// The drag ended over a target and the move was handed to the executor.
    Dropped(MoveOutcome),
    /// The drag ended with no eligible target; nothing moved.
    DroppedOutside {
        /// Task that was dragged.
        task_id: TaskId,
    },
    /// The store refused the move; nothing moved.
    Rejected(BoardError),
    /// The gesture was cancelled; nothing moved.
    Cancelled {
        /// Cancellation cause.
        reason: CancelReason,
    },
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Idle,
    Armed(DragOrigin),
    Dragging {
        origin: DragOrigin,
        target: Option<ResolvedTarget>,
    },
}

/// Owns the state of at most one drag gesture.
#[derive(Debug)]
pub struct DragController {
    activation_distance: f64,
    state: SessionState,
}

impl DragController {
    /// Creates an idle controller using the configured activation distance.
    ///
    /// The distance comes from a validated [`BoardConfig`], so it is always
    /// finite and non-negative.
    #[must_use]
    pub const fn from_config(config: &BoardConfig) -> Self {
        Self {
            activation_distance: config.activation_distance(),
            state: SessionState::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self.state {
            SessionState::Idle => DragPhase::Idle,
            SessionState::Armed(_) => DragPhase::Armed,
            SessionState::Dragging { .. } => DragPhase::Dragging,
        }
    }

    /// Returns the origin of the gesture in flight.
    #[must_use]
    pub const fn origin(&self) -> Option<&DragOrigin> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Armed(origin) | SessionState::Dragging { origin, .. } => Some(origin),
        }
    }

    /// Returns the last target resolved during a drag.
    #[must_use]
    pub const fn resolved_target(&self) -> Option<&ResolvedTarget> {
        match &self.state {
            SessionState::Dragging { target, .. } => target.as_ref(),
            SessionState::Idle | SessionState::Armed(_) => None,
        }
    }

    /// Returns the record of the task being dragged, for the overlay card.
    #[must_use]
    pub fn active_task<'b>(&self, board: &'b Board) -> Option<&'b Task> {
        match &self.state {
            SessionState::Dragging { origin, .. } => board.task(&origin.task_id),
            SessionState::Idle | SessionState::Armed(_) => None,
        }
    }

    /// Handles one pointer event.
    ///
    /// Events are processed strictly in call order; a drop is fully applied
    /// before this returns.
    pub fn handle(&mut self, store: &mut BoardStore, event: PointerEvent) -> DragOutcome {
        let (next, outcome) = match (std::mem::take(&mut self.state), event) {
            (SessionState::Idle, PointerEvent::Down { target, position }) => {
                arm(store, target, position)
            }
            (SessionState::Armed(origin), PointerEvent::Move { position, geometry }) => {
                self.try_start(store, origin, position, &geometry)
            }
            (SessionState::Armed(origin), PointerEvent::Up { .. }) => {
                debug!(task_id = %origin.task_id, "press released below threshold, treating as click");
                (
                    SessionState::Idle,
                    DragOutcome::Clicked {
                        task_id: origin.task_id,
                    },
                )
            }
            (SessionState::Dragging { origin, .. }, PointerEvent::Move { geometry, .. }) => {
                let target = closest_corners(store.board(), &geometry);
                (
                    SessionState::Dragging {
                        origin,
                        target: target.clone(),
                    },
                    DragOutcome::TargetUpdated(target),
                )
            }
            (SessionState::Dragging { origin, target }, PointerEvent::Up { .. }) => {
                (SessionState::Idle, finish(store, origin, target))
            }
            (
                SessionState::Armed(origin) | SessionState::Dragging { origin, .. },
                PointerEvent::Cancel { reason },
            ) => {
                debug!(task_id = %origin.task_id, ?reason, "drag gesture cancelled");
                (SessionState::Idle, DragOutcome::Cancelled { reason })
            }
            (state, _) => (state, DragOutcome::Ignored),
        };
        self.state = next;
        outcome
    }

    fn try_start(
        &self,
        store: &BoardStore,
        origin: DragOrigin,
        position: Point,
        geometry: &DragGeometry,
    ) -> (SessionState, DragOutcome) {
        if origin.start.distance_to(position) <= self.activation_distance {
            return (SessionState::Armed(origin), DragOutcome::Ignored);
        }
        let target = closest_corners(store.board(), geometry);
        debug!(task_id = %origin.task_id, column = %origin.column, "drag started");
        (
            SessionState::Dragging {
                origin: origin.clone(),
                target: target.clone(),
            },
            DragOutcome::Started { origin, target },
        )
    }
}

fn arm(store: &BoardStore, target: PointerTarget, position: Point) -> (SessionState, DragOutcome) {
    let PointerTarget::Task(task_id) = target else {
        return (SessionState::Idle, DragOutcome::Ignored);
    };
    let Some(location) = store.locate(&task_id) else {
        debug!(task_id = %task_id, "press on unknown task ignored");
        return (SessionState::Idle, DragOutcome::Ignored);
    };
    let origin = DragOrigin {
        task_id,
        column: location.column,
        index: location.index,
        start: position,
    };
    (SessionState::Armed(origin.clone()), DragOutcome::Armed(origin))
}

fn finish(
    store: &mut BoardStore,
    origin: DragOrigin,
    target: Option<ResolvedTarget>,
) -> DragOutcome {
    let Some(resolved) = target else {
        debug!(task_id = %origin.task_id, "drag ended without a target");
        return DragOutcome::DroppedOutside {
            task_id: origin.task_id,
        };
    };
    let request = MoveRequest::new(origin.task_id, origin.column, resolved);
    match execute_move(store, &request) {
        Ok(outcome) => DragOutcome::Dropped(outcome),
        Err(err) => {
            warn!(task_id = %request.task_id, error = %err, "drop rejected by board store");
            DragOutcome::Rejected(err)
        }
    }
}
