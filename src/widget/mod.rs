//! Overlay widgets: declarative models and their per-frame evaluation.

/// Per-frame widget state.
pub mod evaluate;
/// Widget declarations as they appear in composition JSON.
pub mod model;
