use crate::animation::interp::{Extrapolate, clamped_lerp};
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::{Fps, Point, Vec2};
use crate::interaction::events::{InteractionKind, InteractionMap};
use serde::{Deserialize, Serialize};

/// Default falloff radius in pixels.
pub const DEFAULT_RANGE: f64 = 400.0;
/// Default displacement strength at distance 0.
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// Whether elements lean toward or away from the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnetMode {
    /// Lean toward the pointer.
    #[default]
    Attract,
    /// Lean away from the pointer.
    Repel,
}

impl MagnetMode {
    fn direction(self) -> f64 {
        match self {
            Self::Attract => 1.0,
            Self::Repel => -1.0,
        }
    }
}

/// Magnetic displacement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetConfig {
    /// Attract or repel.
    pub mode: MagnetMode,
    /// Falloff radius in pixels; no effect beyond it.
    pub range: f64,
    /// Strength multiplier at distance 0.
    pub intensity: f64,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            mode: MagnetMode::Attract,
            range: DEFAULT_RANGE,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl MagnetConfig {
    /// Range and intensity with malformed values replaced by defaults.
    fn sanitized(self) -> (f64, f64) {
        let range = if self.range.is_finite() && self.range > 0.0 {
            self.range
        } else {
            DEFAULT_RANGE
        };
        let intensity = if self.intensity.is_finite() && self.intensity >= 0.0 {
            self.intensity
        } else {
            DEFAULT_INTENSITY
        };
        (range, intensity)
    }
}

/// Offset to apply to an element anchored at `element` so it leans toward (or away from) the most
/// recent recorded pointer position at `frame`.
///
/// The effect fades in with a spring from the moment the pointer event was recorded.
pub fn magnetic_displacement(
    interactions: &InteractionMap,
    element: Point,
    frame: u64,
    fps: Fps,
    config: MagnetConfig,
) -> Vec2 {
    let Some(event) = interactions.latest(InteractionKind::CursorMove, frame) else {
        return Vec2::ZERO;
    };
    let (range, intensity) = config.sanitized();

    let delta = event.coords - element;
    let distance = delta.hypot();
    if !distance.is_finite() || distance > range {
        return Vec2::ZERO;
    }

    let power = clamped_lerp(distance, [0.0, range], [1.0, 0.0], Extrapolate::Clamp) * intensity;
    let elapsed = (frame - event.timestamp_frame) as f64;
    let ramp = spring(elapsed, fps, SpringConfig::MAGNET_ONSET, 0.0, 1.0);

    delta * (power * config.mode.direction() * ramp)
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/magnet.rs"]
mod tests;
