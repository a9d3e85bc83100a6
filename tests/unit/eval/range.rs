use super::*;

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn sequential_range_is_in_frame_order() {
    let (frames, stats) = eval_range(
        &SceneDef::github_stats(),
        &ProfileStats::fallback(),
        range(10, 20),
        &EvalThreading::default(),
    )
    .unwrap();
    assert_eq!(frames.len(), 10);
    assert_eq!(stats.frames_total, 10);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame, FrameIndex(10 + i as u64));
    }
}

#[test]
fn parallel_matches_sequential() {
    let scene = SceneDef::github_stats();
    let data = ProfileStats::fallback();
    let (seq, seq_stats) =
        eval_range(&scene, &data, range(0, 150), &EvalThreading::default()).unwrap();
    let (par, par_stats) = eval_range(
        &scene,
        &data,
        range(0, 150),
        &EvalThreading {
            parallel: true,
            threads: Some(2),
            chunk_size: 16,
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn distinct_count_sees_animation() {
    let (_, stats) = eval_range(
        &SceneDef::github_stats(),
        &ProfileStats::fallback(),
        range(0, 30),
        &EvalThreading::default(),
    )
    .unwrap();
    assert_eq!(stats.frames_distinct, 30);
}

#[test]
fn rejects_bad_ranges_and_threads() {
    let scene = SceneDef::github_stats();
    let data = ProfileStats::fallback();
    assert!(matches!(
        eval_range(&scene, &data, range(5, 5), &EvalThreading::default()),
        Err(StatReelError::Validation(_))
    ));
    assert!(matches!(
        eval_range(&scene, &data, range(590, 601), &EvalThreading::default()),
        Err(StatReelError::Validation(_))
    ));
    let zero = EvalThreading {
        parallel: true,
        threads: Some(0),
        chunk_size: 8,
    };
    assert!(matches!(
        eval_range(&scene, &data, range(0, 4), &zero),
        Err(StatReelError::Validation(_))
    ));
    let zero_sequential = EvalThreading {
        parallel: false,
        ..zero
    };
    assert!(matches!(
        eval_range(&scene, &data, range(0, 4), &zero_sequential),
        Err(StatReelError::Validation(_))
    ));
}

#[test]
fn zero_chunk_size_still_evaluates() {
    let (frames, _) = eval_range(
        &SceneDef::github_stats(),
        &ProfileStats::fallback(),
        range(0, 3),
        &EvalThreading {
            parallel: true,
            threads: Some(1),
            chunk_size: 0,
        },
    )
    .unwrap();
    assert_eq!(frames.len(), 3);
}
