//! Pure frame-driven animation primitives.
//!
//! Every function here is a pure function of its inputs: the same frame and configuration always
//! produce bit-identical output.

/// Easing curves.
pub mod ease;
/// Piecewise interpolation with clamp/extend extrapolation.
pub mod interpolate;
/// Procedural oscillators for ambient pulses.
pub mod proc;
/// Damped spring progress.
pub mod spring;
/// Per-element entrance delays.
pub mod stagger;
