//! Task board core.
//!
//! A board is a fixed set of ordered columns holding task records. Drag
//! gestures reorder a task within its column or move it to another column at
//! a computed position. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Configuration in [`config`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, drag controller, collision resolver and move executor in
//!   [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
