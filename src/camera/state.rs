use crate::animation::interp::Lerp;
use crate::foundation::core::{Affine, Canvas, Point, Vec2};

/// Zoom/pan framing of the whole output frame. Computed per frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    /// Zoom factor, `>= 0`.
    pub zoom: f64,
    /// Horizontal pan in pre-zoom pixels.
    pub pan_x: f64,
    /// Vertical pan in pre-zoom pixels.
    pub pan_y: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for CameraState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            zoom: <f64 as Lerp>::lerp(&a.zoom, &b.zoom, t),
            pan_x: <f64 as Lerp>::lerp(&a.pan_x, &b.pan_x, t),
            pan_y: <f64 as Lerp>::lerp(&a.pan_y, &b.pan_y, t),
        }
    }
}

impl CameraState {
    /// No zoom, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan_x: 0.0,
        pan_y: 0.0,
    };

    /// Pan as a vector.
    pub fn pan(self) -> Vec2 {
        Vec2::new(self.pan_x, self.pan_y)
    }

    /// Output transform: scale the whole frame by `zoom` about the canvas center, then
    /// translate by the pan.
    ///
    /// `p' = center + zoom * (p - center) + pan`.
    pub fn to_affine(self, canvas: Canvas) -> Affine {
        Affine::translate(self.pan()) * Affine::scale_about(self.zoom, canvas.center())
    }

    /// Where a frame-space point lands after applying the camera on `canvas`.
    pub fn project(self, p: Point, canvas: Canvas) -> Point {
        self.to_affine(canvas) * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/state.rs"]
mod tests;
