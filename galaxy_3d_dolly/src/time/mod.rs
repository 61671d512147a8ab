//! Time module — host-supplied frame time.
//!
//! Behaviours never read a wall clock themselves: the host advances a
//! [`Clock`] once per frame and hands the resulting [`FrameTime`] down.

mod clock;

pub use clock::{Clock, FrameTime};
