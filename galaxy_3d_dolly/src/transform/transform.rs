/// Transform — position and orientation of a stage object.
///
/// Right-handed, Y up. A camera looks down its local -Z axis, the same
/// convention as `Mat4::look_at_rh`, so `view_matrix()` can be handed
/// straight to a Galaxy3D camera.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Below this squared length a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1.0e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// World-space viewing direction (local -Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// World-space right direction (local +X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World-space up direction (local +Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local-to-world matrix.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// World-to-local matrix (camera view matrix).
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    // ===== ORIENTATION =====

    /// Rotate so that `forward()` points at `target`, keeping world Y as up.
    ///
    /// Returns false, leaving the rotation untouched, when `target` is the
    /// current position.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        self.look_at_with_up(target, Vec3::Y)
    }

    /// Rotate so that `forward()` points at `target` with `up` as the
    /// reference up vector.
    ///
    /// When the view direction is parallel to `up`, an arbitrary vector
    /// orthogonal to `up` stands in for it so the result stays a valid
    /// rotation.
    pub fn look_at_with_up(&mut self, target: Vec3, up: Vec3) -> bool {
        let direction = target - self.position;
        if direction.length_squared() < DEGENERATE_EPSILON {
            return false;
        }
        let forward = direction.normalize();

        let mut up = up.try_normalize().unwrap_or(Vec3::Y);
        if forward.cross(up).length_squared() < DEGENERATE_EPSILON {
            up = up.any_orthonormal_vector();
        }

        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward)).normalize();
        true
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
