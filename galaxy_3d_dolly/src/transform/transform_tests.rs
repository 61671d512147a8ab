use glam::{Mat4, Quat, Vec3};
use super::*;

const EPS: f32 = 1.0e-5;

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {:?}, got {:?}", expected, actual
    );
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_identity() {
    let t = Transform::default();
    assert_eq!(t, Transform::IDENTITY);
    assert_eq!(t.position(), Vec3::ZERO);
    assert_eq!(t.rotation(), Quat::IDENTITY);
    assert_vec3_near(t.forward(), Vec3::NEG_Z);
    assert_vec3_near(t.right(), Vec3::X);
    assert_vec3_near(t.up(), Vec3::Y);
}

#[test]
fn test_from_position() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.rotation(), Quat::IDENTITY);
}

#[test]
fn test_set_rotation_normalizes() {
    let mut t = Transform::IDENTITY;
    t.set_rotation(Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));
    assert!((t.rotation().length() - 1.0).abs() < EPS);
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_points_forward_at_target() {
    let mut t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
    let target = Vec3::new(0.0, 0.0, -5.0);

    assert!(t.look_at(target));
    assert_vec3_near(t.forward(), (target - t.position()).normalize());
}

#[test]
fn test_look_at_keeps_horizon_level() {
    let mut t = Transform::from_position(Vec3::new(3.0, 1.0, 4.0));
    t.look_at(Vec3::new(-2.0, 0.5, 0.0));

    // Right vector stays in the horizontal plane when up is world Y
    assert!(t.right().y.abs() < EPS);
    assert!(t.up().y > 0.0);
}

#[test]
fn test_look_at_matches_look_at_rh() {
    let eye = Vec3::new(4.0, 3.0, 8.0);
    let target = Vec3::new(-1.0, 0.0, 2.0);

    let mut t = Transform::from_position(eye);
    t.look_at(target);

    let expected = Mat4::look_at_rh(eye, target, Vec3::Y);
    assert!(t.view_matrix().abs_diff_eq(expected, 1.0e-4));
}

#[test]
fn test_look_at_same_position_is_noop() {
    let rotation = Quat::from_rotation_y(0.7);
    let mut t = Transform::new(Vec3::ONE, rotation);

    assert!(!t.look_at(Vec3::ONE));
    assert_eq!(t.rotation(), rotation);
}

#[test]
fn test_look_at_straight_up_uses_fallback() {
    let mut t = Transform::IDENTITY;

    assert!(t.look_at(Vec3::new(0.0, 10.0, 0.0)));
    assert_vec3_near(t.forward(), Vec3::Y);
    assert!(t.rotation().is_normalized());
    assert!(t.right().dot(Vec3::Y).abs() < EPS);
}

#[test]
fn test_look_at_with_custom_up() {
    let mut t = Transform::IDENTITY;
    t.look_at_with_up(Vec3::new(5.0, 0.0, 0.0), Vec3::Z);

    assert_vec3_near(t.forward(), Vec3::X);
    assert_vec3_near(t.up(), Vec3::Z);
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_world_and_view_are_inverse() {
    let t = Transform::new(Vec3::new(1.0, -2.0, 3.0), Quat::from_rotation_x(0.3));
    let product = t.world_matrix() * t.view_matrix();
    assert!(product.abs_diff_eq(Mat4::IDENTITY, EPS));
}

#[test]
fn test_world_matrix_translation() {
    let t = Transform::from_position(Vec3::new(7.0, 8.0, 9.0));
    assert_vec3_near(t.world_matrix().w_axis.truncate(), Vec3::new(7.0, 8.0, 9.0));
}
