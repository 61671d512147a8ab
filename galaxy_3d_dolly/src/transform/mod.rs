//! Transform module — object placement and aim points.
//!
//! A [`Transform`] is the position + orientation of one stage object.
//! An [`Anchor`] is anything a camera can be pointed at.

mod transform;
mod anchor;

pub use transform::Transform;
pub use anchor::{Anchor, TransformHandle};
