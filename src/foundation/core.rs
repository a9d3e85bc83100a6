use crate::foundation::error::{StatReelError, StatReelResult};

pub use kurbo::Vec2;

/// Zero-based frame index on a scene timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame (inclusive).
    pub start: FrameIndex,
    /// End frame (exclusive).
    pub end: FrameIndex,
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> StatReelResult<Self> {
        if start.0 > end.0 {
            return Err(StatReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range holds no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Rational frame rate (`num / den` frames per second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> StatReelResult<Self> {
        if den == 0 {
            return Err(StatReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(StatReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Re-check the invariants of a value that bypassed [`Fps::new`] (e.g. deserialized).
    pub fn validate(self) -> StatReelResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional or negative) frame offset to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Whole frames elapsed after `secs` seconds (floored, never negative).
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output canvas size in pixels, passed through to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Current frame and frame rate, supplied by the host renderer.
///
/// Evaluators only read it; advancing the clock is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    /// Current frame.
    pub frame: FrameIndex,
    /// Frame rate of the scene being rendered.
    pub fps: Fps,
}

impl FrameClock {
    /// Clock positioned at `frame`.
    pub fn new(frame: FrameIndex, fps: Fps) -> Self {
        Self { frame, fps }
    }

    /// Frames elapsed since `start` (negative before it).
    pub fn frames_since(self, start: FrameIndex) -> i64 {
        signed_delta(self.frame.0, start.0)
    }

    /// Seconds elapsed since frame zero.
    pub fn secs(self) -> f64 {
        self.fps.frames_to_secs(self.frame.0 as f64)
    }
}

/// `a - b` as a signed frame count, saturating at the `i64` bounds.
pub(crate) fn signed_delta(a: u64, b: u64) -> i64 {
    let d = i128::from(a) - i128::from(b);
    d.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
