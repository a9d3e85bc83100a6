use crate::foundation::error::{StatReelError, StatReelResult};

/// Sine oscillator over frames, remapped from `[-1, 1]` into `[lo, hi]`.
///
/// Element `i` samples `sin((frame + phase_frames + i * phase_step_frames) / period_frames)`,
/// which is how pulses and glows drift out of step across a row of icons.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Frames per radian; must be > 0.
    pub period_frames: f64,
    /// Phase offset shared by all elements.
    #[serde(default)]
    pub phase_frames: f64,
    /// Additional phase per element index.
    #[serde(default)]
    pub phase_step_frames: f64,
    /// Value at the sine trough.
    pub lo: f64,
    /// Value at the sine crest.
    pub hi: f64,
}

impl Oscillator {
    /// Oscillator without phase offsets.
    pub fn new(period_frames: f64, lo: f64, hi: f64) -> Self {
        Self {
            period_frames,
            phase_frames: 0.0,
            phase_step_frames: 0.0,
            lo,
            hi,
        }
    }

    /// Set the per-element phase step.
    pub fn with_phase_step(mut self, phase_step_frames: f64) -> Self {
        self.phase_step_frames = phase_step_frames;
        self
    }

    /// Reject a non-positive period or non-finite parameters.
    pub fn validate(&self) -> StatReelResult<()> {
        if !self.period_frames.is_finite() || self.period_frames <= 0.0 {
            return Err(StatReelError::invalid_config(format!(
                "oscillator period_frames must be finite and > 0, got {}",
                self.period_frames
            )));
        }
        if ![self.phase_frames, self.phase_step_frames, self.lo, self.hi]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(StatReelError::invalid_config(
                "oscillator phase and range must be finite",
            ));
        }
        Ok(())
    }

    /// Value for element `index` at `frame`.
    pub fn sample(&self, frame: f64, index: usize) -> StatReelResult<f64> {
        self.validate()?;
        if !frame.is_finite() {
            return Err(StatReelError::evaluation(format!(
                "oscillator frame must be finite, got {frame}"
            )));
        }
        Ok(self.sample_unchecked(frame, index))
    }

    fn sample_unchecked(&self, frame: f64, index: usize) -> f64 {
        let phase = self.phase_frames + index as f64 * self.phase_step_frames;
        let s = ((frame + phase) / self.period_frames).sin();
        let t = (s + 1.0) * 0.5;
        self.lo * (1.0 - t) + self.hi * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
