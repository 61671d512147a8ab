/// CameraAutoDolly — a camera that swings along one axis while aiming at a target.
///
/// Every frame the owning object is placed at
/// `start + axis * cos(elapsed * speed) * amplitude`
/// and then rotated to face the target anchor. `start` is the object's
/// position when the behaviour starts; it is the only state kept across
/// frames.
///
/// Note that the swing is centered on `start`, and at `elapsed = 0` the
/// camera sits at the far end, `start + axis * amplitude`.

use std::fmt;
use std::sync::Arc;
use glam::Vec3;
use crate::error::Result;
use crate::stage::Behaviour;
use crate::time::FrameTime;
use crate::transform::{Anchor, Transform};
use crate::{dolly_debug, dolly_trace, dolly_warn};
use super::dolly_desc::{self, DollyDesc};

pub struct CameraAutoDolly {
    speed: f32,
    amplitude: f32,
    axis: Vec3,
    target: Option<Arc<dyn Anchor>>,
    start_position: Option<Vec3>,
    /// Set once the "no target" warning has been logged
    missing_target_reported: bool,
}

impl Default for CameraAutoDolly {
    /// Speed 1, amplitude 10, swinging along world X, no target.
    fn default() -> Self {
        let desc = DollyDesc::default();
        Self {
            speed: desc.speed,
            amplitude: desc.amplitude,
            axis: desc.axis,
            target: None,
            start_position: None,
            missing_target_reported: false,
        }
    }
}

impl fmt::Debug for CameraAutoDolly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraAutoDolly")
            .field("speed", &self.speed)
            .field("amplitude", &self.amplitude)
            .field("axis", &self.axis)
            .field("has_target", &self.target.is_some())
            .field("start_position", &self.start_position)
            .finish()
    }
}

impl CameraAutoDolly {
    /// Create a dolly from a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `desc.validate()` fails.
    pub fn new(desc: DollyDesc) -> Result<Self> {
        desc.validate()?;
        Ok(Self {
            speed: desc.speed,
            amplitude: desc.amplitude,
            axis: dolly_desc::normalized_axis(desc.axis)?,
            ..Self::default()
        })
    }

    /// Builder-style target assignment.
    pub fn with_target(mut self, target: Arc<dyn Anchor>) -> Self {
        self.set_target(Some(target));
        self
    }

    // ===== GETTERS =====

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Unit swing direction.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn target(&self) -> Option<&Arc<dyn Anchor>> {
        self.target.as_ref()
    }

    /// Position captured at start, `None` until the behaviour has started.
    pub fn start_position(&self) -> Option<Vec3> {
        self.start_position
    }

    // ===== SETTERS =====

    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        dolly_desc::validate_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<()> {
        dolly_desc::validate_amplitude(amplitude)?;
        self.amplitude = amplitude;
        Ok(())
    }

    /// Replace the target. `None` leaves the camera orientation alone.
    pub fn set_target(&mut self, target: Option<Arc<dyn Anchor>>) {
        self.target = target;
        self.missing_target_reported = false;
    }

    // ===== OSCILLATION =====

    /// Displacement from the start position at `elapsed` seconds.
    pub fn offset_at(&self, elapsed: f32) -> Vec3 {
        self.axis * ((elapsed * self.speed).cos() * self.amplitude)
    }

    /// Absolute position at `elapsed` seconds, once a start position exists.
    pub fn position_at(&self, elapsed: f32) -> Option<Vec3> {
        self.start_position.map(|start| start + self.offset_at(elapsed))
    }

    fn aim(&mut self, transform: &mut Transform) {
        let target = match self.target.as_ref().and_then(|anchor| anchor.anchor_position()) {
            Some(position) => position,
            None => {
                if !self.missing_target_reported {
                    dolly_warn!("galaxy3d::CameraAutoDolly",
                        "No target anchor available, keeping current orientation");
                    self.missing_target_reported = true;
                }
                return;
            }
        };
        self.missing_target_reported = false;

        if !transform.look_at(target) {
            dolly_trace!("galaxy3d::CameraAutoDolly", "Target coincides with camera at {}", target);
        }
    }
}

impl Behaviour for CameraAutoDolly {
    fn start(&mut self, transform: &Transform) -> Result<()> {
        self.start_position = Some(transform.position());
        dolly_debug!("galaxy3d::CameraAutoDolly",
            "Started at {} (speed {}, amplitude {})", transform.position(), self.speed, self.amplitude);
        Ok(())
    }

    fn update(&mut self, time: &FrameTime, transform: &mut Transform) -> Result<()> {
        // Driven without a prior start: the current position becomes the start
        let start = *self.start_position.get_or_insert(transform.position());

        transform.set_position(start + self.offset_at(time.elapsed));
        self.aim(transform);
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_auto_dolly_tests.rs"]
mod tests;
