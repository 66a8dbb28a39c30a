use crate::animation::spring::{SpringConfig, measure_spring};
use crate::foundation::core::{Fps, Point, Rect, Rgba8};
use crate::interaction::magnet::MagnetConfig;
use serde::{Deserialize, Serialize};

/// A positioned overlay element.
///
/// Kind-specific fields live in [`WidgetKind`], flattened next to the common ones in JSON:
/// `{ "id": "title", "kind": "typed_text", "text": "Hello", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique widget identifier.
    pub id: String,
    /// Scene this widget belongs to. Scoped widgets use scene-local frames and are absent while
    /// another scene is active; unscoped widgets use global frames.
    #[serde(default)]
    pub scene: Option<String>,
    /// Placement and look.
    #[serde(default)]
    pub style: WidgetStyle,
    /// How the widget appears.
    #[serde(default)]
    pub entrance: Entrance,
    /// Decorative idle bob.
    #[serde(default)]
    pub float: Option<FloatMotion>,
    /// Lean toward/away from the recorded pointer.
    #[serde(default)]
    pub magnet: Option<MagnetConfig>,
    /// Kind-specific content.
    #[serde(flatten)]
    pub kind: WidgetKind,
}

/// Kind-specific widget content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetKind {
    /// Generic card/badge with an optional label.
    Panel {
        /// Label text.
        #[serde(default)]
        label: Option<String>,
    },
    /// Text revealed character by character.
    TypedText {
        /// Full text.
        text: String,
        /// Show a blinking caret after the revealed text.
        #[serde(default)]
        show_cursor: bool,
    },
    /// Animated mouse pointer.
    Pointer {
        /// Start position of the pointer tip.
        from: Point,
        /// End position of the pointer tip.
        to: Point,
        /// First frame of the move.
        #[serde(default)]
        move_start: u64,
        /// Frame the move completes.
        #[serde(default)]
        move_end: u64,
        /// Frame a click pulse starts, if any.
        #[serde(default)]
        click_frame: Option<u64>,
    },
}

/// Placement and look of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyle {
    /// Left edge in output pixels.
    pub x: f64,
    /// Top edge in output pixels.
    pub y: f64,
    /// Width in output pixels.
    pub width: f64,
    /// Height in output pixels.
    pub height: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Stacking order; higher draws on top.
    pub z: i32,
}

impl WidgetStyle {
    /// Bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Entrance animation style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceKind {
    /// Appear at full scale and opacity.
    None,
    /// Spring scale from 0 to 1; opacity follows scale.
    #[default]
    Pop,
    /// Linear opacity fade over `duration_frames`.
    Fade,
    /// Spring scale with an independent linear fade.
    ScaleFade,
}

/// Fraction of the travel a spring entrance may still be off by and count as settled.
pub const SETTLE_THRESHOLD: f64 = 0.005;

/// Declarative entrance: how and when a widget appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entrance {
    /// Style.
    pub kind: EntranceKind,
    /// Frames before the widget exists at all.
    pub delay_frames: u64,
    /// Length of fades and of the typing reveal.
    pub duration_frames: u64,
    /// Spring used by `pop` and `scale_fade`.
    pub spring: SpringConfig,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            kind: EntranceKind::Pop,
            delay_frames: 0,
            duration_frames: 20,
            spring: SpringConfig::default(),
        }
    }
}

impl Entrance {
    /// Frame, in the widget's own frame space, from which the entrance no longer changes scale
    /// or opacity.
    pub fn settle_frames(&self, fps: Fps) -> u64 {
        let spring = || measure_spring(fps, self.spring, SETTLE_THRESHOLD);
        let active = match self.kind {
            EntranceKind::None => 0,
            EntranceKind::Pop => spring(),
            EntranceKind::Fade => self.duration_frames,
            EntranceKind::ScaleFade => spring().max(self.duration_frames),
        };
        self.delay_frames.saturating_add(active)
    }
}

/// Decorative vertical bob: `sin((frame + delay) / period) * amplitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatMotion {
    /// Frames per radian.
    pub period: f64,
    /// Peak offset in pixels.
    pub amplitude: f64,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            period: 30.0,
            amplitude: 6.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/model.rs"]
mod tests;
