use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::{
        interpolate::InterpolationSpec, proc::Oscillator, spring::SpringConfig,
        stagger::StaggerTable,
    },
    data::profile::ProfileStats,
    foundation::{
        color::Rgba8,
        core::{Canvas, FrameIndex, Fps},
        error::{StatReelError, StatReelResult},
    },
};

/// Declarative description of an animated stats scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    /// Human-readable scene name.
    pub name: String,
    /// Playback rate.
    pub fps: Fps,
    /// Output size, passed through to the renderer.
    pub canvas: Canvas,
    /// Total length in frames; valid frames are `0..duration_frames`.
    pub duration_frames: u64,
    /// Cards in paint order.
    pub cards: Vec<CardDef>,
}

/// One card: a container element with its own entrance, plus staggered child groups.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardDef {
    /// Unique id within the scene; must not contain `/`.
    pub id: String,
    /// Entrance time in seconds from scene start.
    pub start_secs: f64,
    /// Spring driving the card's own progress.
    #[serde(default = "default_entrance")]
    pub entrance: SpringConfig,
    /// Channels applied to the card element.
    #[serde(default)]
    pub channels: Vec<ChannelDef>,
    /// Child element groups.
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

fn default_entrance() -> SpringConfig {
    SpringConfig::new(80.0, 100.0)
}

/// A row of similar elements inside a card, entering one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupDef {
    /// Unique id within the card; must not contain `/`.
    pub id: String,
    /// Number of elements.
    pub count: CountSource,
    /// Per-index entrance delay relative to the card start.
    #[serde(default)]
    pub stagger: StaggerTable,
    /// Spring driving each element's progress.
    pub spring: SpringConfig,
    /// Channels applied to every element of the group.
    #[serde(default)]
    pub channels: Vec<ChannelDef>,
    /// Data-driven extent weights.
    #[serde(default)]
    pub weights: WeightSource,
    /// Per-index color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSource>,
}

/// Where a group's element count comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountSource {
    /// Constant count.
    Fixed(usize),
    /// One element per activity month.
    Activity,
    /// One element per language.
    Languages,
    /// One element per achievement.
    Achievements,
}

impl CountSource {
    /// Element count for `stats`.
    pub fn resolve(self, stats: &ProfileStats) -> usize {
        match self {
            Self::Fixed(n) => n,
            Self::Activity => stats.activity.len(),
            Self::Languages => stats.languages.len(),
            Self::Achievements => stats.achievements.len(),
        }
    }
}

/// Data-driven `(weight, offset)` per element; extent becomes `weight * progress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    /// Extent equals progress.
    #[default]
    None,
    /// Commits relative to the busiest month.
    ActivityCommits,
    /// Language share, with the offset at the cumulative share of earlier languages.
    LanguagePercentage,
}

impl WeightSource {
    /// `(weight, offset)` per element, or `None` when extent is plain progress.
    pub fn resolve(self, stats: &ProfileStats) -> Option<Vec<(f64, f64)>> {
        match self {
            Self::None => None,
            Self::ActivityCommits => Some(
                stats
                    .activity_weights()
                    .into_iter()
                    .map(|w| (w, 0.0))
                    .collect(),
            ),
            Self::LanguagePercentage => Some(stats.language_segments()),
        }
    }
}

/// Per-index color assignment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// HSL hue swept linearly from `from` (first element) to `to` (last element), in degrees.
    Hue {
        /// Hue of the first element.
        from: f64,
        /// Hue of the last element.
        to: f64,
        /// Saturation in `[0, 1]`.
        #[serde(default = "default_saturation")]
        saturation: f64,
        /// Lightness in `[0, 1]`.
        #[serde(default = "default_lightness")]
        lightness: f64,
    },
    /// Colors cycled by index.
    Palette(Vec<Rgba8>),
}

fn default_saturation() -> f64 {
    0.7
}

fn default_lightness() -> f64 {
    0.6
}

impl ColorSource {
    /// Color of element `index` out of `count`.
    pub fn color_for(&self, index: usize, count: usize) -> Option<Rgba8> {
        match self {
            Self::Hue {
                from,
                to,
                saturation,
                lightness,
            } => {
                let hue = if count <= 1 {
                    *from
                } else {
                    let t = index as f64 / (count - 1) as f64;
                    from * (1.0 - t) + to * t
                };
                Some(Rgba8::from_hsla(hue, *saturation, *lightness, 1.0))
            }
            Self::Palette(colors) => {
                if colors.is_empty() {
                    None
                } else {
                    Some(colors[index % colors.len()])
                }
            }
        }
    }

    /// Hue parameters must be finite and a palette non-empty.
    pub fn validate(&self) -> StatReelResult<()> {
        match self {
            Self::Hue {
                from,
                to,
                saturation,
                lightness,
            } => {
                if ![from, to, saturation, lightness].iter().all(|v| v.is_finite()) {
                    return Err(StatReelError::invalid_spec(
                        "hue color parameters must be finite",
                    ));
                }
            }
            Self::Palette(colors) => {
                if colors.is_empty() {
                    return Err(StatReelError::invalid_spec("palette must not be empty"));
                }
            }
        }
        Ok(())
    }
}

/// Visual property written by a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Opacity, clamped to `[0, 1]` after all channels ran.
    Opacity,
    /// Uniform scale.
    Scale,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    /// Rotation in degrees.
    RotateDeg,
    /// Fraction of a bar or ring segment that is drawn.
    Extent,
}

/// Input value of a channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSource {
    /// The element's spring progress.
    #[default]
    Progress,
    /// Frames since the card started (negative before).
    Frame,
    /// Oscillator sampled at the card-local frame and element index.
    Oscillator(Oscillator),
}

/// How a channel value combines with what earlier channels wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    /// Overwrite.
    #[default]
    Set,
    /// Multiply into the current value.
    Multiply,
    /// Add to the current value.
    Add,
}

/// Source value, optionally remapped, written into one visual property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelDef {
    /// Property written.
    pub target: Channel,
    /// Input value.
    #[serde(default)]
    pub source: ChannelSource,
    /// Optional remap of the source value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<InterpolationSpec>,
    /// Combination with earlier channels targeting the same property.
    #[serde(default)]
    pub mode: Combine,
}

impl ChannelDef {
    /// Write `source` into `target` unchanged.
    pub fn new(target: Channel, source: ChannelSource) -> Self {
        Self {
            target,
            source,
            map: None,
            mode: Combine::Set,
        }
    }

    /// Write the element's progress into `target`.
    pub fn progress(target: Channel) -> Self {
        Self::new(target, ChannelSource::Progress)
    }

    /// Remap the source through `spec` first.
    pub fn mapped(mut self, spec: InterpolationSpec) -> Self {
        self.map = Some(spec);
        self
    }

    /// Combine with earlier channels using `mode`.
    pub fn combine(mut self, mode: Combine) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the remap and the oscillator, if any.
    pub fn validate(&self) -> StatReelResult<()> {
        if let ChannelSource::Oscillator(osc) = &self.source {
            osc.validate()?;
        }
        if let Some(map) = &self.map {
            map.validate()?;
        }
        Ok(())
    }
}

impl SceneDef {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StatReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StatReelError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StatReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StatReelError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// First frame of `card`'s entrance.
    pub fn card_start(&self, card: &CardDef) -> FrameIndex {
        FrameIndex(self.fps.secs_to_frames_floor(card.start_secs))
    }

    /// Check structure and every animation parameter.
    ///
    /// Spring and oscillator errors surface as `InvalidConfig`, interpolation and color errors as
    /// `InvalidSpec`, structural problems as `Validation`; messages name the offending card or
    /// group.
    pub fn validate(&self) -> StatReelResult<()> {
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StatReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration_frames == 0 {
            return Err(StatReelError::validation("duration must be > 0 frames"));
        }

        let mut card_ids = BTreeSet::new();
        for card in &self.cards {
            validate_id(&card.id, "card")?;
            if !card_ids.insert(card.id.as_str()) {
                return Err(StatReelError::validation(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
            if !card.start_secs.is_finite() || card.start_secs < 0.0 {
                return Err(StatReelError::validation(format!(
                    "card '{}' start_secs must be finite and >= 0",
                    card.id
                )));
            }

            let card_ctx = || format!("card '{}'", card.id);
            card.entrance.validate().map_err(|e| e.context(card_ctx()))?;
            for ch in &card.channels {
                ch.validate().map_err(|e| e.context(card_ctx()))?;
            }

            let mut group_ids = BTreeSet::new();
            for group in &card.groups {
                validate_id(&group.id, "group").map_err(|e| e.context(card_ctx()))?;
                if !group_ids.insert(group.id.as_str()) {
                    return Err(StatReelError::validation(format!(
                        "card '{}' has duplicate group id '{}'",
                        card.id, group.id
                    )));
                }
                let group_ctx = || format!("group '{}/{}'", card.id, group.id);
                group.spring.validate().map_err(|e| e.context(group_ctx()))?;
                if let Some(color) = &group.color {
                    color.validate().map_err(|e| e.context(group_ctx()))?;
                }
                for ch in &group.channels {
                    ch.validate().map_err(|e| e.context(group_ctx()))?;
                }
            }
        }

        Ok(())
    }
}

fn validate_id(id: &str, what: &str) -> StatReelResult<()> {
    if id.is_empty() || id.contains('/') {
        return Err(StatReelError::validation(format!(
            "{what} id '{id}' must be non-empty and must not contain '/'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
