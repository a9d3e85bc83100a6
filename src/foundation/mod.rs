//! Frame, frame-rate, color and error primitives shared by every evaluator.

/// Colors handed to the rendering layer.
pub mod color;
/// Frame indices, ranges, frame rates and the frame clock.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
