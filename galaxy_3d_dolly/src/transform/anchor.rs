/// Anchor — a point of interest a camera can be aimed at.
///
/// Anchors are read every frame, so a moving target is tracked
/// automatically. An anchor that cannot produce a position (its object
/// was removed) reports `None` and the camera keeps its last orientation.

use std::sync::{Arc, RwLock, Weak};
use glam::Vec3;
use super::transform::Transform;

/// Shared, lockable transform of a stage object.
pub type TransformHandle = Arc<RwLock<Transform>>;

/// Source of a world-space aim point.
pub trait Anchor: Send + Sync {
    /// Current world position, or `None` if the anchor is gone.
    fn anchor_position(&self) -> Option<Vec3>;
}

/// Fixed point in world space.
impl Anchor for Vec3 {
    fn anchor_position(&self) -> Option<Vec3> {
        Some(*self)
    }
}

/// Live object transform. A poisoned lock still yields the last written value.
impl Anchor for RwLock<Transform> {
    fn anchor_position(&self) -> Option<Vec3> {
        let transform = match self.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        };
        Some(transform.position())
    }
}

/// Non-owning reference to an object transform.
impl Anchor for Weak<RwLock<Transform>> {
    fn anchor_position(&self) -> Option<Vec3> {
        self.upgrade().and_then(|transform| transform.anchor_position())
    }
}

#[cfg(test)]
#[path = "anchor_tests.rs"]
mod tests;
