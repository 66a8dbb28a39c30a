//! Boundary scene model.

/// JSON-facing composition object.
pub mod composition;
/// Scenes, transitions, camera targets and anchors.
pub mod model;
