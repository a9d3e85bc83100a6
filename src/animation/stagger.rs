use crate::foundation::core::FrameIndex;

/// Entrance delay, in frames, for each element index of a group.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerTable {
    /// `delay(i) = offset + i * step`.
    Linear {
        /// Delay of element 0.
        #[serde(default)]
        offset: u64,
        /// Added per index.
        step: u64,
    },
    /// Per-index delays; indices past the end reuse the last entry, an empty table means 0.
    Explicit(Vec<u64>),
}

impl Default for StaggerTable {
    fn default() -> Self {
        Self::Linear { offset: 0, step: 0 }
    }
}

impl StaggerTable {
    /// Evenly spaced delays starting at zero.
    pub fn linear(step: u64) -> Self {
        Self::Linear { offset: 0, step }
    }

    /// Delay in frames for element `index` (saturating).
    pub fn delay(&self, index: usize) -> u64 {
        match self {
            Self::Linear { offset, step } => {
                let index = u64::try_from(index).unwrap_or(u64::MAX);
                offset.saturating_add(step.saturating_mul(index))
            }
            Self::Explicit(table) => table
                .get(index)
                .or_else(|| table.last())
                .copied()
                .unwrap_or(0),
        }
    }

    /// Frame at which element `index` starts moving.
    pub fn start_frame(&self, scene_start: FrameIndex, index: usize) -> FrameIndex {
        FrameIndex(scene_start.0.saturating_add(self.delay(index)))
    }

    /// `global - scene_start - delay(index)`; negative before the element starts.
    pub fn relative_frame(&self, global: FrameIndex, scene_start: FrameIndex, index: usize) -> i64 {
        relative_frame(global, scene_start, self.delay(index))
    }
}

/// `global - start - delay` as a signed frame count, saturating at the `i64` bounds.
pub fn relative_frame(global: FrameIndex, start: FrameIndex, delay: u64) -> i64 {
    let d = i128::from(global.0) - i128::from(start.0) - i128::from(delay);
    d.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
