use glam::Vec3;
use crate::error::Error;
use super::*;

#[test]
fn test_default_desc() {
    let desc = DollyDesc::default();
    assert_eq!(desc.speed, 1.0);
    assert_eq!(desc.amplitude, 10.0);
    assert_eq!(desc.axis, Vec3::X);
    assert!(desc.validate().is_ok());
}

#[test]
fn test_negative_and_zero_values_are_valid() {
    let desc = DollyDesc {
        speed: -2.0,
        amplitude: 0.0,
        ..Default::default()
    };
    assert!(desc.validate().is_ok());
}

#[test]
fn test_non_finite_speed_rejected() {
    let desc = DollyDesc { speed: f32::NAN, ..Default::default() };
    assert!(matches!(desc.validate(), Err(Error::InvalidParameter(msg)) if msg.contains("Speed")));
}

#[test]
fn test_non_finite_amplitude_rejected() {
    let desc = DollyDesc { amplitude: f32::NEG_INFINITY, ..Default::default() };
    assert!(matches!(desc.validate(), Err(Error::InvalidParameter(msg)) if msg.contains("Amplitude")));
}

#[test]
fn test_bad_axis_rejected() {
    let zero = DollyDesc { axis: Vec3::ZERO, ..Default::default() };
    let nan = DollyDesc { axis: Vec3::new(f32::NAN, 0.0, 0.0), ..Default::default() };
    assert!(zero.validate().is_err());
    assert!(nan.validate().is_err());
}

#[test]
fn test_normalized_axis() {
    let axis = normalized_axis(Vec3::new(0.0, 0.0, 4.0)).unwrap();
    assert_eq!(axis, Vec3::Z);
}
