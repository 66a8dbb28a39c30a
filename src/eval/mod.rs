//! Frame evaluation: the engine that ties timeline, camera and widgets into per-frame snapshots.

/// Validated composition plus single-frame and range evaluation.
pub mod engine;
/// Per-frame output value and its fingerprint.
pub mod snapshot;
