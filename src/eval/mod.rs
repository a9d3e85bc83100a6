//! Scene evaluation: one frame, whole ranges, and stable fingerprints of the result.

/// Per-frame scene evaluator and its output types.
pub mod evaluator;
/// Stable frame digests.
pub mod fingerprint;
/// Sequential and parallel range evaluation.
pub mod range;
