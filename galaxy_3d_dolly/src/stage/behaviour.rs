/// Behaviour strategies.
///
/// A Behaviour is attached to a stage object and mutates its transform
/// once per frame. `&mut self` lets implementations keep state between
/// frames (cached start position, one-shot warnings, etc.).

use crate::error::Result;
use crate::time::FrameTime;
use crate::transform::Transform;

/// Per-frame logic attached to a stage object.
pub trait Behaviour: Send + Sync {
    /// Called once, right before the first `update` of an active object.
    ///
    /// Receives the object's transform as it is at activation.
    fn start(&mut self, _transform: &Transform) -> Result<()> {
        Ok(())
    }

    /// Called every frame while the owning object is active.
    fn update(&mut self, time: &FrameTime, transform: &mut Transform) -> Result<()>;
}

/// No-op behaviour — does nothing.
///
/// Placeholder for objects that only exist to be looked at.
pub struct NoOpBehaviour;

impl NoOpBehaviour {
    pub fn new() -> Self {
        Self
    }
}

impl Behaviour for NoOpBehaviour {
    fn update(&mut self, _time: &FrameTime, _transform: &mut Transform) -> Result<()> {
        Ok(())
    }
}
