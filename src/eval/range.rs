use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    data::profile::ProfileStats,
    eval::{
        evaluator::{Evaluator, FrameState},
        fingerprint::fingerprint_frame,
    },
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{StatReelError, StatReelResult},
    },
    scene::model::SceneDef,
};

/// Options controlling range evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalThreading {
    /// Evaluate frames in parallel on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Frames handed to the pool per batch; 0 is treated as 1.
    pub chunk_size: usize,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Range evaluation statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EvalStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with distinct fingerprints.
    pub frames_distinct: u64,
}

/// Evaluate every frame of `range`, returned in frame order.
#[tracing::instrument(skip(scene, stats))]
pub fn eval_range(
    scene: &SceneDef,
    stats: &ProfileStats,
    range: FrameRange,
    threading: &EvalThreading,
) -> StatReelResult<(Vec<FrameState>, EvalStats)> {
    scene.validate()?;
    if range.is_empty() {
        return Err(StatReelError::validation("eval_range requires a non-empty range"));
    }
    if range.end.0 > scene.duration_frames {
        return Err(StatReelError::validation(format!(
            "range end {} exceeds scene duration {}",
            range.end.0, scene.duration_frames
        )));
    }
    if threading.threads == Some(0) {
        return Err(StatReelError::validation(
            "eval_range 'threads' must be >= 1 when set",
        ));
    }

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let frames = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let mut out = Vec::with_capacity(range.len_frames() as usize);
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let chunk = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| Evaluator::eval_frame_validated(scene, stats, FrameIndex(f)))
                    .collect::<StatReelResult<Vec<_>>>()
            })?;
            out.extend(chunk);
            chunk_start = chunk_end;
        }
        out
    } else {
        (range.start.0..range.end.0)
            .map(|f| Evaluator::eval_frame_validated(scene, stats, FrameIndex(f)))
            .collect::<StatReelResult<Vec<_>>>()?
    };

    let distinct = frames
        .iter()
        .map(fingerprint_frame)
        .collect::<HashSet<_>>()
        .len();
    let eval_stats = EvalStats {
        frames_total: frames.len() as u64,
        frames_distinct: distinct as u64,
    };
    tracing::debug!(
        frames_total = eval_stats.frames_total,
        frames_distinct = eval_stats.frames_distinct,
        "range evaluated"
    );

    Ok((frames, eval_stats))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> StatReelResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StatReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/range.rs"]
mod tests;
