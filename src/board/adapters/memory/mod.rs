//! In-memory adapters for the board ports.

mod persistence;

pub use persistence::InMemoryBoardPersistence;
