//! Application services for the board: store, drag handling and relays.

mod bootstrap;
mod drag;
mod executor;
mod relay;
mod resolver;
mod store;

pub use bootstrap::{BoardSession, BootstrapError, bootstrap};
pub use drag::{
    CancelReason, DragController, DragOrigin, DragOutcome, DragPhase, PointerEvent, PointerTarget,
};
pub use executor::{MoveOutcome, MoveRequest, execute_move};
pub use relay::{PersistenceRelay, RelayReport};
pub use resolver::closest_corners;
pub use store::{BoardResult, BoardStore};
