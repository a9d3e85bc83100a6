//! Profile data consumed by scenes, and the providers that load it.

/// Profile records and the static fallback.
pub mod profile;
/// Provider trait, built-in providers and the background slot.
pub mod provider;
