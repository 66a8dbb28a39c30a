//! Pointer-of-interest resolution and magnetic displacement.

/// Interaction log and event-sourced pointer queries.
pub mod events;
/// Proximity-based element displacement.
pub mod magnet;
