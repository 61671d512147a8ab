//! Stage module
//!
//! Owns stage objects (a shared transform plus attached behaviours) and
//! drives the per-frame lifecycle: `start` once, then `update` every tick.

mod behaviour;
mod stage;

pub use behaviour::{Behaviour, NoOpBehaviour};
pub use stage::{Stage, StageObjectKey};
