use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#22d3ee")).unwrap();
    assert_eq!(c, Rgba8::rgb(0x22, 0xd3, 0xee));

    let c: Rgba8 = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);

    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#zz0000").is_err());
}

#[test]
fn parses_hsla_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(
        c,
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::rgb(0xa8, 0x55, 0xf7)).unwrap();
    assert_eq!(v, json!("#a855f7ff"));
}

#[test]
fn hue_wraps_and_grey_has_no_hue() {
    assert_eq!(
        Rgba8::from_hsla(360.0 + 120.0, 1.0, 0.5, 1.0),
        Rgba8::rgb(0, 255, 0)
    );
    let grey = Rgba8::from_hsla(200.0, 0.0, 0.5, 1.0);
    assert_eq!(grey.r, grey.g);
    assert_eq!(grey.g, grey.b);
}

#[test]
fn activity_bar_hues_are_cyan_to_violet() {
    // hsl(180, 70%, 60%)
    let start = Rgba8::from_hsla(180.0, 0.7, 0.6, 1.0);
    assert_eq!(start, Rgba8::rgb(82, 224, 224));
    let end = Rgba8::from_hsla(280.0, 0.7, 0.6, 1.0);
    assert!(end.b > end.g && end.r > end.g);
}
