use crate::{
    animation::spring::spring,
    data::profile::ProfileStats,
    foundation::{
        color::Rgba8,
        core::{FrameClock, FrameIndex, Vec2},
        error::{StatReelError, StatReelResult},
    },
    scene::model::{Channel, ChannelDef, ChannelSource, Combine, SceneDef},
};

/// Visual parameters of one element at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Spring progress driving the element (0 before its entrance).
    pub progress: f64,
    /// Opacity in `[0, 1]`, relative to the parent card.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Offset in pixels.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Drawn fraction of a bar or ring segment.
    pub extent: f64,
    /// Start of the drawn fraction along the ring.
    pub extent_offset: f64,
    /// Fill color, when the group assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

impl VisualState {
    fn neutral(progress: f64) -> Self {
        Self {
            progress,
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            extent: progress,
            extent_offset: 0.0,
            color: None,
        }
    }

    fn slot(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Opacity => &mut self.opacity,
            Channel::Scale => &mut self.scale,
            Channel::TranslateX => &mut self.translate.x,
            Channel::TranslateY => &mut self.translate.y,
            Channel::RotateDeg => &mut self.rotation_deg,
            Channel::Extent => &mut self.extent,
        }
    }
}

/// One visual element of an evaluated frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementState {
    /// `card` for card elements, `card/group/index` for group elements.
    pub id: String,
    /// Owning card id.
    pub card: String,
    /// Owning group id, for group elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Index within the group (0 for cards).
    pub index: usize,
    /// Evaluated parameters.
    #[serde(flatten)]
    pub state: VisualState,
}

/// All elements of a scene at one frame, cards in authoring order, each followed by its groups.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Element states.
    pub elements: Vec<ElementState>,
}

impl FrameState {
    /// Look up an element by id.
    pub fn get(&self, id: &str) -> Option<&ElementState> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Stateless scene evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Validate `scene` and evaluate it at `frame` against `stats`.
    #[tracing::instrument(skip(scene, stats))]
    pub fn eval_frame(
        scene: &SceneDef,
        stats: &ProfileStats,
        frame: FrameIndex,
    ) -> StatReelResult<FrameState> {
        scene.validate()?;
        Self::eval_frame_validated(scene, stats, frame)
    }

    /// Evaluate a scene that already passed [`SceneDef::validate`].
    pub(crate) fn eval_frame_validated(
        scene: &SceneDef,
        stats: &ProfileStats,
        frame: FrameIndex,
    ) -> StatReelResult<FrameState> {
        if frame.0 >= scene.duration_frames {
            return Err(StatReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, scene.duration_frames
            )));
        }

        let clock = FrameClock::new(frame, scene.fps);
        let fps = clock.fps;
        let mut elements = Vec::new();

        for card in &scene.cards {
            let start = scene.card_start(card);
            let local = clock.frames_since(start) as f64;

            let progress = spring(local, fps, &card.entrance).map_err(|e| e.context(&card.id))?;
            let mut state = VisualState::neutral(progress);
            apply_channels(&mut state, &card.channels, local, 0).map_err(|e| e.context(&card.id))?;
            elements.push(ElementState {
                id: card.id.clone(),
                card: card.id.clone(),
                group: None,
                index: 0,
                state,
            });

            for group in &card.groups {
                let count = group.count.resolve(stats);
                let weights = group.weights.resolve(stats);
                for index in 0..count {
                    let id = format!("{}/{}/{index}", card.id, group.id);
                    let rel = group.stagger.relative_frame(frame, start, index);
                    let progress =
                        spring(rel as f64, fps, &group.spring).map_err(|e| e.context(&id))?;

                    let mut state = VisualState::neutral(progress);
                    if let Some((weight, offset)) =
                        weights.as_ref().and_then(|w| w.get(index)).copied()
                    {
                        state.extent = weight * progress;
                        state.extent_offset = offset;
                    }
                    state.color = group.color.as_ref().and_then(|c| c.color_for(index, count));
                    apply_channels(&mut state, &group.channels, local, index)
                        .map_err(|e| e.context(&id))?;

                    elements.push(ElementState {
                        id,
                        card: card.id.clone(),
                        group: Some(group.id.clone()),
                        index,
                        state,
                    });
                }
            }
        }

        Ok(FrameState { frame, elements })
    }
}

fn apply_channels(
    state: &mut VisualState,
    channels: &[ChannelDef],
    local_frame: f64,
    index: usize,
) -> StatReelResult<()> {
    for ch in channels {
        let raw = match &ch.source {
            ChannelSource::Progress => state.progress,
            ChannelSource::Frame => local_frame,
            ChannelSource::Oscillator(osc) => osc.sample(local_frame, index)?,
        };
        let v = match &ch.map {
            Some(map) => map.evaluate(raw)?,
            None => raw,
        };
        let slot = state.slot(ch.target);
        *slot = match ch.mode {
            Combine::Set => v,
            Combine::Multiply => *slot * v,
            Combine::Add => *slot + v,
        };
    }
    state.opacity = state.opacity.clamp(0.0, 1.0);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
