//! Kanban core: an order-preserving task board driven by drag gestures.
//!
//! This crate owns the board state, turns pointer events into validated drag
//! sessions, resolves drop targets from layout geometry and commits moves
//! atomically. Rendering and durable storage are external collaborators.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board store, drag lifecycle and persistence relay

pub mod board;
