//! Statreel turns a frame counter into the visual state of an animated GitHub stats scene.
//!
//! Every visual element (a card, a stat tile, an activity bar, a language ring segment) is driven
//! by the same small set of pure functions:
//!
//! - [`spring`]: closed-form damped spring progress from 0 toward 1
//! - [`interpolate`]: piecewise mapping with easing and clamp/extend extrapolation
//! - [`StaggerTable`]: per-element entrance delays
//!
//! [`Evaluator::eval_frame`] applies them to a declarative [`SceneDef`] and returns a
//! [`FrameState`] for a rendering layer to draw. Evaluation is deterministic: the same scene,
//! profile data and frame always produce bit-identical output.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Easing, interpolation, springs, staggering and oscillators.
pub mod animation;
/// Profile data and providers.
pub mod data;
/// Scene evaluation.
pub mod eval;
/// Frame, color and error primitives.
pub mod foundation;
/// Scene definitions.
pub mod scene;

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolation, InterpolationSpec, interpolate};
pub use crate::animation::proc::Oscillator;
pub use crate::animation::spring::{SpringConfig, spring, spring_settle_frames};
pub use crate::animation::stagger::{StaggerTable, relative_frame};
pub use crate::data::profile::{
    LanguageShare, MonthActivity, Overview, Profile, ProfileStats, UserRecord,
};
pub use crate::data::provider::{
    JsonDirProvider, ProfileProvider, ProfileSlot, StaticProvider, fetch_or_fallback,
};
pub use crate::eval::evaluator::{ElementState, Evaluator, FrameState, VisualState};
pub use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::eval::range::{EvalStats, EvalThreading, eval_range};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{Canvas, Fps, FrameClock, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{StatReelError, StatReelResult};
pub use crate::scene::model::{
    CardDef, Channel, ChannelDef, ChannelSource, ColorSource, Combine, CountSource, GroupDef,
    SceneDef, WeightSource,
};
