use super::*;

fn minimal() -> SceneDef {
    SceneDef {
        name: "t".to_owned(),
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas {
            width: 64,
            height: 64,
        },
        duration_frames: 90,
        cards: vec![CardDef {
            id: "c".to_owned(),
            start_secs: 1.0,
            entrance: SpringConfig::new(80.0, 100.0),
            channels: vec![ChannelDef::progress(Channel::Opacity)],
            groups: vec![GroupDef {
                id: "g".to_owned(),
                count: CountSource::Fixed(3),
                stagger: StaggerTable::linear(4),
                spring: SpringConfig::new(100.0, 150.0),
                channels: vec![],
                weights: WeightSource::None,
                color: None,
            }],
        }],
    }
}

#[test]
fn minimal_scene_validates() {
    minimal().validate().unwrap();
    assert_eq!(minimal().card_start(&minimal().cards[0]), FrameIndex(30));
}

#[test]
fn structural_errors_are_validation_errors() {
    let mut s = minimal();
    s.duration_frames = 0;
    assert!(matches!(s.validate(), Err(StatReelError::Validation(_))));

    let mut s = minimal();
    s.cards.push(s.cards[0].clone());
    assert!(matches!(s.validate(), Err(StatReelError::Validation(_))));

    let mut s = minimal();
    s.cards[0].groups[0].id = "a/b".to_owned();
    assert!(matches!(s.validate(), Err(StatReelError::Validation(_))));

    let mut s = minimal();
    s.cards[0].start_secs = f64::NAN;
    assert!(s.validate().is_err());
}

#[test]
fn bad_spring_keeps_its_kind_and_names_the_group() {
    let mut s = minimal();
    s.cards[0].groups[0].spring.damping = 0.0;
    let err = s.validate().unwrap_err();
    assert!(matches!(err, StatReelError::InvalidConfig(_)));
    assert!(err.to_string().contains("c/g"), "{err}");
}

#[test]
fn bad_map_is_invalid_spec() {
    let mut s = minimal();
    s.cards[0].channels[0].map = Some(InterpolationSpec::new([1.0, 0.0], [0.0, 1.0]));
    let err = s.validate().unwrap_err();
    assert!(matches!(err, StatReelError::InvalidSpec(_)));
    assert!(err.to_string().contains("card 'c'"), "{err}");
}

#[test]
fn counts_and_weights_follow_profile_data() {
    let stats = ProfileStats::fallback();
    assert_eq!(CountSource::Activity.resolve(&stats), 6);
    assert_eq!(CountSource::Languages.resolve(&stats), 5);
    assert_eq!(CountSource::Achievements.resolve(&stats), 3);
    assert_eq!(CountSource::Fixed(2).resolve(&stats), 2);

    assert!(WeightSource::None.resolve(&stats).is_none());
    let w = WeightSource::ActivityCommits.resolve(&stats).unwrap();
    assert_eq!(w[5], (1.0, 0.0));
    let w = WeightSource::LanguagePercentage.resolve(&stats).unwrap();
    assert_eq!(w[1], (0.25, 0.4));
}

#[test]
fn hue_sweeps_over_index_range() {
    let hue = ColorSource::Hue {
        from: 180.0,
        to: 280.0,
        saturation: 0.7,
        lightness: 0.6,
    };
    assert_eq!(hue.color_for(0, 6), Some(Rgba8::rgb(82, 224, 224)));
    assert_eq!(
        hue.color_for(5, 6),
        Some(Rgba8::from_hsla(280.0, 0.7, 0.6, 1.0))
    );
    assert_eq!(hue.color_for(0, 1), hue.color_for(0, 6));
}

#[test]
fn palette_cycles_and_must_not_be_empty() {
    let p = ColorSource::Palette(vec![Rgba8::rgb(1, 2, 3), Rgba8::rgb(4, 5, 6)]);
    assert_eq!(p.color_for(3, 5), Some(Rgba8::rgb(4, 5, 6)));
    assert!(ColorSource::Palette(vec![]).validate().is_err());
}

#[test]
fn channel_json_defaults() {
    let ch: ChannelDef = serde_json::from_str(r#"{"target": "scale"}"#).unwrap();
    assert_eq!(ch.source, ChannelSource::Progress);
    assert_eq!(ch.mode, Combine::Set);
    assert!(ch.map.is_none());

    let ch: ChannelDef = serde_json::from_str(
        r#"{"target": "opacity", "source": {"oscillator": {"period_frames": 25, "lo": 0.5, "hi": 1}}, "mode": "multiply"}"#,
    )
    .unwrap();
    assert!(matches!(ch.source, ChannelSource::Oscillator(_)));
    assert_eq!(ch.mode, Combine::Multiply);
}

#[test]
fn scene_parse_errors_are_serde_errors() {
    let err = SceneDef::from_reader("{\"name\": 3}".as_bytes()).unwrap_err();
    assert!(matches!(err, StatReelError::Serde(_)));
    assert!(SceneDef::from_path("does/not/exist.json").is_err());
}
