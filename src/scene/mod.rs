//! Declarative scene definitions.

/// The built-in GitHub stats dashboard.
pub mod builtin;
/// Scene, card, group and channel definitions.
pub mod model;
