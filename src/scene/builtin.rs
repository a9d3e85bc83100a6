use crate::{
    animation::{
        ease::Ease, interpolate::InterpolationSpec, proc::Oscillator, spring::SpringConfig,
        stagger::StaggerTable,
    },
    foundation::{
        color::Rgba8,
        core::{Canvas, Fps},
    },
    scene::model::{
        CardDef, Channel, ChannelDef, ChannelSource, ColorSource, Combine, CountSource, GroupDef,
        SceneDef, WeightSource,
    },
};

/// Ring and legend colors of the language card.
pub const LANGUAGE_PALETTE: [Rgba8; 5] = [
    Rgba8::rgb(0x22, 0xd3, 0xee),
    Rgba8::rgb(0xa8, 0x55, 0xf7),
    Rgba8::rgb(0xf9, 0x73, 0x16),
    Rgba8::rgb(0x22, 0xc5, 0x5e),
    Rgba8::rgb(0xea, 0xb3, 0x08),
];

fn card_spring() -> SpringConfig {
    SpringConfig::new(80.0, 100.0)
}

fn item_spring() -> SpringConfig {
    SpringConfig::new(100.0, 150.0)
}

fn oscillate(target: Channel, osc: Oscillator) -> ChannelDef {
    ChannelDef::new(target, ChannelSource::Oscillator(osc))
}

fn group(id: &str, count: CountSource, stagger: StaggerTable, spring: SpringConfig) -> GroupDef {
    GroupDef {
        id: id.to_owned(),
        count,
        stagger,
        spring,
        channels: Vec::new(),
        weights: WeightSource::None,
        color: None,
    }
}

fn card(id: &str, start_secs: f64) -> CardDef {
    CardDef {
        id: id.to_owned(),
        start_secs,
        entrance: card_spring(),
        channels: vec![ChannelDef::progress(Channel::Opacity)],
        groups: Vec::new(),
    }
}

impl SceneDef {
    /// The GitHub stats dashboard: six content cards plus the background and title intro, 20 s
    /// at 30 fps, 1920x1080.
    ///
    /// Cards fade in on a `{damping: 80, stiffness: 100}` spring at 0.5 s (profile), 1 s
    /// (overview), 2 s (activity), 3 s (languages), 4 s (achievements) and 5 s (footer), after a
    /// title intro and under a pulsing background.
    pub fn github_stats() -> Self {
        let fps = Fps { num: 30, den: 1 };

        let background = CardDef {
            channels: vec![
                ChannelDef::new(Channel::Opacity, ChannelSource::Frame)
                    .mapped(InterpolationSpec::new([0.0, 60.0], [0.4, 0.9])),
            ],
            groups: vec![
                GroupDef {
                    channels: vec![oscillate(
                        Channel::Opacity,
                        Oscillator::new(40.0, 0.6, 1.0),
                    )],
                    ..group(
                        "cyan_glow",
                        CountSource::Fixed(1),
                        StaggerTable::default(),
                        card_spring(),
                    )
                },
                GroupDef {
                    channels: vec![oscillate(
                        Channel::Opacity,
                        Oscillator::new(50.0, 0.3, 0.7),
                    )],
                    ..group(
                        "orange_glow",
                        CountSource::Fixed(1),
                        StaggerTable::default(),
                        card_spring(),
                    )
                },
            ],
            ..card("background", 0.0)
        };

        let header = CardDef {
            channels: vec![
                ChannelDef::new(Channel::Opacity, ChannelSource::Frame).mapped(
                    InterpolationSpec::new([0.0, 36.0], [0.0, 1.0])
                        .with_ease(Ease::EaseOut)
                        .clamped(),
                ),
                ChannelDef::new(Channel::TranslateY, ChannelSource::Frame).mapped(
                    InterpolationSpec::new([0.0, 30.0], [20.0, 0.0])
                        .with_ease(Ease::EaseOut)
                        .clamped(),
                ),
            ],
            ..card("header", 0.0)
        };

        let profile = CardDef {
            groups: vec![GroupDef {
                channels: vec![oscillate(
                    Channel::Scale,
                    Oscillator::new(30.0, 0.95, 1.05),
                )],
                ..group(
                    "avatar",
                    CountSource::Fixed(1),
                    StaggerTable::default(),
                    card_spring(),
                )
            }],
            ..card("profile", 0.5)
        };

        let overview = CardDef {
            groups: vec![
                GroupDef {
                    channels: vec![
                        ChannelDef::progress(Channel::Scale),
                        ChannelDef::progress(Channel::Opacity),
                    ],
                    ..group(
                        "stats",
                        CountSource::Fixed(4),
                        StaggerTable::linear(8),
                        item_spring(),
                    )
                },
                GroupDef {
                    channels: vec![oscillate(
                        Channel::Scale,
                        Oscillator::new(15.0, 0.85, 1.0).with_phase_step(20.0),
                    )],
                    ..group(
                        "icons",
                        CountSource::Fixed(4),
                        StaggerTable::linear(8),
                        item_spring(),
                    )
                },
            ],
            ..card("overview", 1.0)
        };

        let activity = CardDef {
            groups: vec![
                GroupDef {
                    weights: WeightSource::ActivityCommits,
                    color: Some(ColorSource::Hue {
                        from: 180.0,
                        to: 280.0,
                        saturation: 0.7,
                        lightness: 0.6,
                    }),
                    ..group(
                        "bars",
                        CountSource::Activity,
                        StaggerTable::linear(6),
                        SpringConfig::new(80.0, 120.0),
                    )
                },
                GroupDef {
                    channels: vec![
                        ChannelDef::progress(Channel::Opacity)
                            .mapped(InterpolationSpec::new([0.7, 1.0], [0.0, 1.0])),
                    ],
                    ..group(
                        "labels",
                        CountSource::Activity,
                        StaggerTable::linear(6),
                        SpringConfig::new(80.0, 120.0),
                    )
                },
            ],
            ..card("activity", 2.0)
        };

        let languages = CardDef {
            groups: vec![
                GroupDef {
                    weights: WeightSource::LanguagePercentage,
                    color: Some(ColorSource::Palette(LANGUAGE_PALETTE.to_vec())),
                    ..group(
                        "segments",
                        CountSource::Languages,
                        StaggerTable::linear(12),
                        card_spring(),
                    )
                },
                GroupDef {
                    channels: vec![
                        ChannelDef::progress(Channel::Opacity),
                        ChannelDef::progress(Channel::TranslateX)
                            .mapped(InterpolationSpec::new([0.0, 1.0], [20.0, 0.0])),
                    ],
                    color: Some(ColorSource::Palette(LANGUAGE_PALETTE.to_vec())),
                    ..group(
                        "legend",
                        CountSource::Languages,
                        StaggerTable::Linear {
                            offset: 30,
                            step: 8,
                        },
                        item_spring(),
                    )
                },
            ],
            ..card("languages", 3.0)
        };

        let achievements = CardDef {
            groups: vec![GroupDef {
                channels: vec![
                    ChannelDef::progress(Channel::Scale),
                    oscillate(
                        Channel::Scale,
                        Oscillator::new(20.0, 0.9, 1.05).with_phase_step(30.0),
                    )
                    .combine(Combine::Multiply),
                    ChannelDef::progress(Channel::Opacity),
                ],
                ..group(
                    "badges",
                    CountSource::Achievements,
                    StaggerTable::linear(10),
                    item_spring(),
                )
            }],
            ..card("achievements", 4.0)
        };

        let footer = CardDef {
            groups: vec![
                GroupDef {
                    channels: vec![oscillate(
                        Channel::Opacity,
                        Oscillator::new(25.0, 0.25, 0.5),
                    )],
                    ..group(
                        "glow",
                        CountSource::Fixed(1),
                        StaggerTable::default(),
                        card_spring(),
                    )
                },
                GroupDef {
                    channels: vec![
                        ChannelDef::progress(Channel::Scale),
                        ChannelDef::progress(Channel::Opacity),
                    ],
                    ..group(
                        "icons",
                        CountSource::Fixed(3),
                        StaggerTable::linear(8),
                        item_spring(),
                    )
                },
            ],
            ..card("footer", 5.0)
        };

        Self {
            name: "github-stats".to_owned(),
            fps,
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration_frames: 600,
            cards: vec![
                background,
                header,
                profile,
                overview,
                activity,
                languages,
                achievements,
                footer,
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builtin.rs"]
mod tests;
