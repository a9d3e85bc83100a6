use super::*;

const ALL: [Ease; 12] = [
    Ease::Linear,
    Ease::Standard,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_out_leads_linear() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::EaseOut.apply(t) > t);
        assert!(Ease::EaseIn.apply(t) < t);
    }
}

#[test]
fn named_bezier_matches_explicit_bezier() {
    let explicit = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    for t in [0.2, 0.4, 0.6, 0.8] {
        assert_eq!(Ease::EaseOut.apply(t), explicit.apply(t));
    }
}

#[test]
fn bezier_validation_rejects_out_of_range_x() {
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(matches!(
        bad.validate(),
        Err(StatReelError::InvalidSpec(_))
    ));
    assert!(Ease::EaseInOut.validate().is_ok());
}

#[test]
fn serde_uses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    let e: Ease = serde_json::from_str("\"ease\"").unwrap();
    assert_eq!(e, Ease::Standard);
    let e: Ease =
        serde_json::from_str(r#"{"cubic_bezier": {"x1": 0.1, "y1": 0.7, "x2": 1.0, "y2": 0.1}}"#)
            .unwrap();
    assert!(matches!(e, Ease::CubicBezier { .. }));
}
