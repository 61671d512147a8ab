use super::*;
use crate::error::Error;

// ============================================================================
// FrameTime
// ============================================================================

#[test]
fn test_frame_time_at() {
    let time = FrameTime::at(2.5);
    assert_eq!(time.elapsed, 2.5);
    assert_eq!(time.delta, 0.0);
    assert_eq!(time.frame, 0);
}

// ============================================================================
// Clock
// ============================================================================

#[test]
fn test_clock_starts_at_zero() {
    let clock = Clock::new();
    assert_eq!(clock.now(), FrameTime::at(0.0));
}

#[test]
fn test_clock_advance_accumulates() {
    let mut clock = Clock::new();
    clock.advance(0.5).unwrap();
    let time = clock.advance(0.25).unwrap();

    assert_eq!(time.elapsed, 0.75);
    assert_eq!(time.delta, 0.25);
    assert_eq!(time.frame, 2);
    assert_eq!(clock.now(), time);
}

#[test]
fn test_clock_zero_delta_counts_frame() {
    let mut clock = Clock::new();
    let time = clock.advance(0.0).unwrap();
    assert_eq!(time.elapsed, 0.0);
    assert_eq!(time.frame, 1);
}

#[test]
fn test_clock_rejects_negative_delta() {
    let mut clock = Clock::new();
    clock.advance(1.0).unwrap();

    let result = clock.advance(-0.1);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
    assert_eq!(clock.now().elapsed, 1.0);
    assert_eq!(clock.now().frame, 1);
}

#[test]
fn test_clock_rejects_non_finite_delta() {
    let mut clock = Clock::new();
    assert!(clock.advance(f32::NAN).is_err());
    assert!(clock.advance(f32::INFINITY).is_err());
    assert_eq!(clock.now(), FrameTime::at(0.0));
}

#[test]
fn test_clock_reset() {
    let mut clock = Clock::new();
    clock.advance(3.0).unwrap();
    clock.reset();
    assert_eq!(clock.now(), FrameTime::at(0.0));
}
