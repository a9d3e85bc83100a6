use super::*;
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::Fps;

#[test]
fn linear_delays() {
    let t = StaggerTable::Linear { offset: 30, step: 8 };
    assert_eq!(t.delay(0), 30);
    assert_eq!(t.delay(3), 54);
    assert_eq!(StaggerTable::default().delay(99), 0);
}

#[test]
fn explicit_table_repeats_last_entry() {
    let t = StaggerTable::Explicit(vec![0, 5, 12]);
    assert_eq!(t.delay(1), 5);
    assert_eq!(t.delay(2), 12);
    assert_eq!(t.delay(10), 12);
    assert_eq!(StaggerTable::Explicit(vec![]).delay(4), 0);
}

#[test]
fn linear_delay_saturates() {
    let t = StaggerTable::linear(u64::MAX);
    assert_eq!(t.delay(2), u64::MAX);
    assert_eq!(t.start_frame(FrameIndex(10), 3), FrameIndex(u64::MAX));
}

#[test]
fn index_two_waits_sixteen_frames() {
    let table = StaggerTable::linear(8);
    let fps = Fps::new(30, 1).unwrap();
    let cfg = SpringConfig::new(100.0, 150.0);
    let scene_start = FrameIndex(30);

    for elapsed in 0..=16u64 {
        let rel = table.relative_frame(FrameIndex(30 + elapsed), scene_start, 2);
        assert_eq!(spring(rel as f64, fps, &cfg).unwrap(), 0.0, "elapsed {elapsed}");
    }
    let rel = table.relative_frame(FrameIndex(30 + 17), scene_start, 2);
    assert_eq!(rel, 1);
    assert!(spring(rel as f64, fps, &cfg).unwrap() > 0.0);
}

#[test]
fn relative_frame_is_signed() {
    assert_eq!(relative_frame(FrameIndex(5), FrameIndex(10), 3), -8);
    assert_eq!(relative_frame(FrameIndex(0), FrameIndex(u64::MAX), u64::MAX), i64::MIN);
}

#[test]
fn json_forms() {
    let t: StaggerTable = serde_json::from_str(r#"{"linear": {"step": 6}}"#).unwrap();
    assert_eq!(t, StaggerTable::linear(6));
    let t: StaggerTable = serde_json::from_str(r#"{"explicit": [0, 4]}"#).unwrap();
    assert_eq!(t.delay(7), 4);
}
