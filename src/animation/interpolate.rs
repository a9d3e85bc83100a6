use crate::{
    animation::ease::Ease,
    foundation::error::{StatReelError, StatReelResult},
};

/// Behavior outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Hold the boundary output value.
    Clamp,
    /// Continue the slope of the boundary segment.
    #[default]
    Extend,
}

/// Piecewise mapping from ordered input breakpoints to output values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolationSpec {
    /// Strictly increasing breakpoints.
    pub input_range: Vec<f64>,
    /// Output value at each breakpoint; same length as `input_range`.
    pub output_range: Vec<f64>,
    /// Easing applied to progress within each segment.
    #[serde(default)]
    pub ease: Ease,
    /// Behavior below `input_range[0]`.
    #[serde(default)]
    pub extrapolate_left: Extrapolation,
    /// Behavior above the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolation,
}

impl InterpolationSpec {
    /// Linear mapping that extends past both ends.
    pub fn new(input_range: impl Into<Vec<f64>>, output_range: impl Into<Vec<f64>>) -> Self {
        Self {
            input_range: input_range.into(),
            output_range: output_range.into(),
            ease: Ease::Linear,
            extrapolate_left: Extrapolation::Extend,
            extrapolate_right: Extrapolation::Extend,
        }
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Clamp on both sides.
    pub fn clamped(self) -> Self {
        self.with_extrapolation(Extrapolation::Clamp, Extrapolation::Clamp)
    }

    /// Set left and right extrapolation.
    pub fn with_extrapolation(mut self, left: Extrapolation, right: Extrapolation) -> Self {
        self.extrapolate_left = left;
        self.extrapolate_right = right;
        self
    }

    /// Check the breakpoint invariants and the easing curve.
    pub fn validate(&self) -> StatReelResult<()> {
        let n = self.input_range.len();
        if n != self.output_range.len() {
            return Err(StatReelError::invalid_spec(format!(
                "input_range has {n} breakpoints but output_range has {}",
                self.output_range.len()
            )));
        }
        if n < 2 {
            return Err(StatReelError::invalid_spec(
                "interpolation needs at least 2 breakpoints",
            ));
        }
        if self
            .input_range
            .iter()
            .chain(self.output_range.iter())
            .any(|v| !v.is_finite())
        {
            return Err(StatReelError::invalid_spec(
                "interpolation breakpoints must be finite",
            ));
        }
        if let Some(w) = self.input_range.windows(2).find(|w| w[0] >= w[1]) {
            return Err(StatReelError::invalid_spec(format!(
                "input_range must be strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
        self.ease.validate()
    }

    /// Validate, then evaluate at `input`.
    pub fn evaluate(&self, input: f64) -> StatReelResult<f64> {
        self.validate()?;
        if !input.is_finite() {
            return Err(StatReelError::evaluation(format!(
                "interpolation input must be finite, got {input}"
            )));
        }
        Ok(self.evaluate_unchecked(input))
    }

    fn evaluate_unchecked(&self, x: f64) -> f64 {
        let inp = &self.input_range;
        let out = &self.output_range;
        let last = inp.len() - 1;

        if x < inp[0] {
            return match self.extrapolate_left {
                Extrapolation::Clamp => out[0],
                Extrapolation::Extend => along(inp[0], inp[1], out[0], out[1], x),
            };
        }
        if x > inp[last] {
            return match self.extrapolate_right {
                Extrapolation::Clamp => out[last],
                Extrapolation::Extend => {
                    along(inp[last - 1], inp[last], out[last - 1], out[last], x)
                }
            };
        }

        let i = inp
            .partition_point(|b| *b <= x)
            .saturating_sub(1)
            .min(last - 1);
        let t = self.ease.apply((x - inp[i]) / (inp[i + 1] - inp[i]));
        out[i] * (1.0 - t) + out[i + 1] * t
    }
}

/// Point on the line through `(x0, y0)` and `(x1, y1)`.
fn along(x0: f64, x1: f64, y0: f64, y1: f64, x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Map `input` through `spec`.
pub fn interpolate(input: f64, spec: &InterpolationSpec) -> StatReelResult<f64> {
    spec.evaluate(input)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
