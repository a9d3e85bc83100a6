use crate::foundation::{
    core::Fps,
    error::{StatReelError, StatReelResult},
};

/// Physical parameters of a damped spring driven from 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Stiffness `k`.
    pub stiffness: f64,
    /// Mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Clamp the value at the target once it would overshoot.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Shorthand for a unit-mass spring without overshoot clamping.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// All of damping, stiffness and mass must be finite and strictly positive.
    pub fn validate(&self) -> StatReelResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(StatReelError::invalid_config(format!(
                    "spring {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`; `< 1` oscillates, `>= 1` approaches monotonically.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Spring progress at `relative_frame` frames after the animation starts.
///
/// Closed-form solution of `m x'' + c x' + k (x - 1) = 0` with `x(0) = 0`, `x'(0) = 0`, so the
/// result depends only on the inputs. Returns exactly `0.0` for `relative_frame <= 0`.
pub fn spring(relative_frame: f64, fps: Fps, config: &SpringConfig) -> StatReelResult<f64> {
    config.validate()?;
    fps.validate()?;
    if !relative_frame.is_finite() {
        return Err(StatReelError::evaluation(format!(
            "spring frame must be finite, got {relative_frame}"
        )));
    }
    if relative_frame <= 0.0 {
        return Ok(0.0);
    }
    Ok(spring_unchecked(fps.frames_to_secs(relative_frame), config))
}

fn spring_unchecked(t: f64, config: &SpringConfig) -> f64 {
    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    let x = if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let env = (-zeta * w0 * t).exp();
        let b = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - env * ((wd * t).cos() + b * (wd * t).sin())
    } else {
        // (zeta - z2) * (zeta + z2) == 1; slow root via the conjugate, no cancellation.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 / (zeta + z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = 1.0 / (2.0 * z2 * (zeta + z2));
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    };

    if config.overshoot_clamping {
        x.min(1.0)
    } else {
        x
    }
}

const SETTLE_SEARCH_LIMIT: u64 = 1 << 22;

/// First whole frame from which the spring stays within `threshold` of its target forever.
///
/// Useful for sizing a scene so every entrance has visibly finished before the last frame.
pub fn spring_settle_frames(
    fps: Fps,
    config: &SpringConfig,
    threshold: f64,
) -> StatReelResult<u64> {
    config.validate()?;
    fps.validate()?;
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(StatReelError::invalid_config(format!(
            "settle threshold must be within (0, 1), got {threshold}"
        )));
    }

    let deviation =
        |frame: u64| (1.0 - spring_unchecked(fps.frames_to_secs(frame as f64), config)).abs();
    let zeta = config.damping_ratio();

    if zeta >= 1.0 - 1e-6 {
        // Monotonic approach: bracket by doubling, then bisect.
        let mut hi = 1u64;
        while deviation(hi) >= threshold {
            hi *= 2;
            if hi > SETTLE_SEARCH_LIMIT {
                return Err(StatReelError::evaluation(
                    "spring does not settle within the search window",
                ));
            }
        }
        let mut lo = 0u64;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if deviation(mid) < threshold {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        return Ok(hi);
    }

    // Underdamped: |1 - x(t)| <= e^(-zeta w0 t) / sqrt(1 - zeta^2). Past the frame where that
    // envelope drops under the threshold nothing can leave the band, so scan back from there.
    let w0 = config.natural_frequency();
    let envelope_secs = (1.0 / (threshold * (1.0 - zeta * zeta).sqrt())).ln() / (zeta * w0);
    let upper = (envelope_secs.max(0.0) * fps.as_f64()).ceil();
    if !upper.is_finite() || upper > SETTLE_SEARCH_LIMIT as f64 {
        return Err(StatReelError::evaluation(
            "spring does not settle within the search window",
        ));
    }

    let mut frame = upper as u64;
    while frame > 0 && deviation(frame - 1) < threshold {
        frame -= 1;
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
