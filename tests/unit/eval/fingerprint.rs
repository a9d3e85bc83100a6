use super::*;
use crate::{
    data::profile::ProfileStats, eval::evaluator::Evaluator, foundation::core::FrameIndex,
    scene::model::SceneDef,
};

fn frame(f: u64) -> FrameState {
    Evaluator::eval_frame(
        &SceneDef::github_stats(),
        &ProfileStats::fallback(),
        FrameIndex(f),
    )
    .unwrap()
}

#[test]
fn same_state_same_fingerprint() {
    assert_eq!(fingerprint_frame(&frame(42)), fingerprint_frame(&frame(42)));
}

#[test]
fn frame_index_is_not_hashed() {
    let a = frame(42);
    let mut b = a.clone();
    b.frame = FrameIndex(7);
    assert_eq!(fingerprint_frame(&a), fingerprint_frame(&b));
}

#[test]
fn any_value_change_changes_the_fingerprint() {
    let a = frame(42);
    let mut b = a.clone();
    b.elements[3].state.scale += 1e-12;
    assert_ne!(fingerprint_frame(&a), fingerprint_frame(&b));

    let mut c = a.clone();
    c.elements[0].state.color = Some(crate::foundation::color::Rgba8::rgb(0, 0, 0));
    assert_ne!(fingerprint_frame(&a), fingerprint_frame(&c));
}

#[test]
fn animated_frames_differ() {
    assert_ne!(fingerprint_frame(&frame(40)), fingerprint_frame(&frame(41)));
}

#[test]
fn displays_as_32_hex_digits() {
    let s = fingerprint_frame(&frame(0)).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
