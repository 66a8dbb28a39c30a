//! Global frame to scene resolution.

/// Scene prefix table and frame resolution.
pub mod resolve;
