//! Dolly configuration

use glam::Vec3;
use crate::error::Result;
use crate::dolly_err;

/// Tunables of a [`CameraAutoDolly`](super::CameraAutoDolly)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyDesc {
    /// Angular speed of the swing, in radians per second
    pub speed: f32,
    /// Half-width of the swing, in world units
    pub amplitude: f32,
    /// World-space direction of the swing (normalized on use)
    pub axis: Vec3,
}

impl Default for DollyDesc {
    fn default() -> Self {
        Self {
            speed: 1.0,
            amplitude: 10.0,
            axis: Vec3::X,
        }
    }
}

impl DollyDesc {
    /// Check that every field can drive the oscillation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if speed or amplitude is NaN or
    /// infinite, or if the axis is non-finite or zero-length.
    pub fn validate(&self) -> Result<()> {
        validate_speed(self.speed)?;
        validate_amplitude(self.amplitude)?;
        normalized_axis(self.axis)?;
        Ok(())
    }
}

pub(crate) fn validate_speed(speed: f32) -> Result<()> {
    if !speed.is_finite() {
        return Err(dolly_err!("galaxy3d::CameraAutoDolly", "Speed must be finite, got {}", speed));
    }
    Ok(())
}

pub(crate) fn validate_amplitude(amplitude: f32) -> Result<()> {
    if !amplitude.is_finite() {
        return Err(dolly_err!("galaxy3d::CameraAutoDolly", "Amplitude must be finite, got {}", amplitude));
    }
    Ok(())
}

pub(crate) fn normalized_axis(axis: Vec3) -> Result<Vec3> {
    axis.try_normalize().ok_or_else(|| {
        dolly_err!("galaxy3d::CameraAutoDolly", "Axis must be finite and non-zero, got {}", axis)
    })
}

#[cfg(test)]
#[path = "dolly_desc_tests.rs"]
mod tests;
