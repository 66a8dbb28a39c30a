use crate::foundation::core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One timed segment of the composition with its own camera intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: String,
    /// Scene length in seconds; frames are `round(duration_seconds * fps)`.
    pub duration_seconds: f64,
    /// How the camera blends in from the previous scene.
    #[serde(default)]
    pub transition: Transition,
    /// Manual camera framing, used when no anchor resolves.
    #[serde(default)]
    pub camera_target: Option<CameraTarget>,
    /// Anchor to auto-frame the camera onto.
    #[serde(default)]
    pub visual_anchor_id: Option<String>,
    /// Keep the camera at identity for this scene.
    #[serde(default)]
    pub motion_locked: bool,
}

/// Blend style and length used when entering a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Blend style.
    #[serde(default)]
    pub kind: TransitionKind,
    /// Blend length in frames. `None` uses the engine default.
    #[serde(default)]
    pub duration_frames: Option<u64>,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration_frames: None,
        }
    }
}

impl Transition {
    /// Effective blend length: `0` for cuts, else the configured or default duration.
    pub fn effective_frames(self, default_frames: u64) -> u64 {
        match self.kind {
            TransitionKind::Cut => 0,
            _ => self.duration_frames.unwrap_or(default_frames),
        }
    }
}

/// Transition styles. Only `Cut` is instantaneous.
///
/// Unknown names deserialize as `Fade` so speculative plans still render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TransitionKind {
    /// Hard cut, no camera blend.
    Cut,
    /// Cross-fade.
    #[default]
    Fade,
    /// Slide the incoming scene in.
    Slide,
    /// Wipe across the frame.
    Wipe,
    /// Zoom through.
    Zoom,
}

impl From<String> for TransitionKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cut" | "none" | "hard_cut" => Self::Cut,
            "slide" | "push" => Self::Slide,
            "wipe" => Self::Wipe,
            "zoom" | "zoom_through" => Self::Zoom,
            "fade" | "crossfade" | "dissolve" => Self::Fade,
            other => {
                tracing::debug!(kind = other, "unknown transition kind, using fade");
                Self::Fade
            }
        }
    }
}

/// Manual camera framing. Missing fields default to zoom 1 and pan 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTarget {
    /// Zoom factor.
    #[serde(default)]
    pub zoom: Option<f64>,
    /// Horizontal pan in pre-zoom pixels.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical pan in pre-zoom pixels.
    #[serde(default)]
    pub y: Option<f64>,
}

/// Bounding box of a real UI element in output-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    #[serde(alias = "w")]
    pub width: f64,
    /// Height.
    #[serde(alias = "h")]
    pub height: f64,
}

impl AnchorRect {
    /// Return `true` when all fields are finite and the size is positive.
    pub fn is_well_formed(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Convert to a [`kurbo::Rect`].
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
