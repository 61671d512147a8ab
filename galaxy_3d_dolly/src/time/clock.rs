/// Clock — monotonic elapsed time driven by per-frame deltas.
///
/// The host decides how long a frame lasts (fixed step, measured wall
/// time, replay data) and feeds it to `advance`. Elapsed time never goes
/// backwards.

use crate::error::Result;
use crate::dolly_err;

/// Snapshot of time for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started
    pub elapsed: f32,
    /// Seconds since the previous frame
    pub delta: f32,
    /// Frame counter, 0 before the first advance
    pub frame: u64,
}

impl FrameTime {
    /// Frame time at an absolute elapsed value, with no delta.
    ///
    /// Useful when the host already tracks its own timeline.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            delta: 0.0,
            frame: 0,
        }
    }
}

/// Monotonic frame clock.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    elapsed: f32,
    delta: f32,
    frame: u64,
}

impl Clock {
    /// Create a clock at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame time without advancing
    pub fn now(&self) -> FrameTime {
        FrameTime {
            elapsed: self.elapsed,
            delta: self.delta,
            frame: self.frame,
        }
    }

    /// Advance by `delta` seconds and return the new frame time.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `delta` is negative, NaN or infinite.
    /// The clock is left unchanged in that case.
    pub fn advance(&mut self, delta: f32) -> Result<FrameTime> {
        if !delta.is_finite() {
            return Err(dolly_err!("galaxy3d::Clock", "Frame delta must be finite, got {}", delta));
        }
        if delta < 0.0 {
            return Err(dolly_err!("galaxy3d::Clock", "Frame delta must not be negative, got {}", delta));
        }

        self.elapsed += delta;
        self.delta = delta;
        self.frame += 1;
        Ok(self.now())
    }

    /// Back to t = 0, frame 0
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
