//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod persistence;

pub use persistence::{BoardPersistence, BoardPersistenceError, BoardPersistenceResult};
