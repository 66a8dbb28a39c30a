//! Temporal primitives shared by every evaluator.
//!
//! Everything here is a pure function of frame time; nothing carries state between samples.

/// Easing curves and eased progress.
pub mod ease;
/// Clamped and piecewise linear interpolation.
pub mod interp;
/// Closed-form damped spring.
pub mod spring;
