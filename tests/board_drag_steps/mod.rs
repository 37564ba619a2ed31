//! Step definitions for board drag behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
