//! Domain models for the medleave system.

mod leave;

pub use leave::*;
