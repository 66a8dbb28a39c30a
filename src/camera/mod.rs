//! Camera choreography: per-scene targets, inter-scene blends and idle drift.

/// Target resolution and per-frame camera evaluation.
pub mod choreo;
/// Camera value type and its frame transform.
pub mod state;
