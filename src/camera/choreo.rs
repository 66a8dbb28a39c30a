use crate::animation::ease::{Ease, eased_progress};
use crate::animation::interp::Lerp;
use crate::camera::state::CameraState;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::math::finite_or;
use crate::scene::model::{AnchorRect, CameraTarget, Scene, TransitionKind};
use crate::timeline::resolve::SceneCursor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower bound of anchor-derived zoom.
pub const MIN_ANCHOR_ZOOM: f64 = 1.2;
/// Upper bound of anchor-derived zoom.
pub const MAX_ANCHOR_ZOOM: f64 = 3.0;
/// Blend length for non-cut transitions that do not set one.
pub const DEFAULT_TRANSITION_FRAMES: u64 = 30;

/// Idle "alive" wobble added to the pan once a scene has settled.
///
/// The phase follows the absolute frame, not the time since the transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftOpts {
    /// Turn drift on or off.
    pub enabled: bool,
    /// Radians per frame.
    pub frequency: f64,
    /// Peak of the raw sine.
    pub amplitude: f64,
    /// Share of the raw sine applied to each pan axis.
    pub pan_factor: f64,
}

impl Default for DriftOpts {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.05,
            amplitude: 5.0,
            pan_factor: 0.1,
        }
    }
}

impl DriftOpts {
    /// Pan offset (same on both axes) at absolute frame `frame`.
    pub fn offset(self, frame: u64) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        let drift = (frame as f64 * self.frequency).sin() * self.amplitude;
        finite_or(drift * self.pan_factor, 0.0)
    }

    /// Largest absolute value [`DriftOpts::offset`] can return.
    pub fn max_offset(self) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        finite_or((self.amplitude * self.pan_factor).abs(), 0.0)
    }
}

/// A camera blend in progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionState {
    /// Blend style of the incoming scene.
    pub kind: TransitionKind,
    /// Eased progress in `[0, 1)`.
    pub progress: f64,
    /// Outgoing scene id.
    pub from_scene: String,
    /// Incoming scene id.
    pub to_scene: String,
}

/// Camera output for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraFrame {
    /// Camera to apply to the whole frame.
    pub camera: CameraState,
    /// Present while the active scene is still blending in.
    pub transition: Option<TransitionState>,
}

/// Zoom/pan that centers `anchor` on the canvas, or `None` when the anchor is malformed.
pub fn anchor_target(anchor: &AnchorRect, canvas: Canvas) -> Option<CameraState> {
    if !anchor.is_well_formed() {
        return None;
    }
    let fw = f64::from(canvas.width);
    let fh = f64::from(canvas.height);
    let scale = (0.5 * fw / anchor.width).clamp(MIN_ANCHOR_ZOOM, MAX_ANCHOR_ZOOM);
    let c = anchor.center();
    Some(CameraState {
        zoom: scale,
        pan_x: fw / (2.0 * scale) - c.x,
        pan_y: fh / (2.0 * scale) - c.y,
    })
}

fn manual_target(t: &CameraTarget) -> CameraState {
    let zoom = match t.zoom {
        Some(z) if z.is_finite() && z > 0.0 => z,
        _ => 1.0,
    };
    CameraState {
        zoom,
        pan_x: finite_or(t.x.unwrap_or(0.0), 0.0),
        pan_y: finite_or(t.y.unwrap_or(0.0), 0.0),
    }
}

/// Resolves per-scene camera targets and per-frame camera state.
///
/// Borrows the composition's read-only data; holds no state across frames.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig<'a> {
    canvas: Canvas,
    anchors: &'a BTreeMap<String, AnchorRect>,
    drift: DriftOpts,
    default_transition_frames: u64,
}

impl<'a> CameraRig<'a> {
    /// Create a rig over a canvas and its anchor map.
    pub fn new(
        canvas: Canvas,
        anchors: &'a BTreeMap<String, AnchorRect>,
        drift: DriftOpts,
        default_transition_frames: u64,
    ) -> Self {
        Self {
            canvas,
            anchors,
            drift,
            default_transition_frames,
        }
    }

    /// Camera target of `scene`: motion lock, then anchor, then manual target, then identity.
    ///
    /// Unknown or malformed anchors fall through to the next rule.
    pub fn target(&self, scene: &Scene) -> CameraState {
        if scene.motion_locked {
            return CameraState::IDENTITY;
        }
        if let Some(id) = scene.visual_anchor_id.as_deref() {
            match self.anchors.get(id).and_then(|a| anchor_target(a, self.canvas)) {
                Some(t) => return t,
                None => tracing::trace!(scene = %scene.id, anchor = id, "anchor unresolved"),
            }
        }
        scene
            .camera_target
            .as_ref()
            .map(manual_target)
            .unwrap_or(CameraState::IDENTITY)
    }

    /// Camera for global `frame`, which `cursor` must have been resolved from.
    pub fn frame(&self, scenes: &[Scene], cursor: &SceneCursor, frame: FrameIndex) -> CameraFrame {
        let scene = &scenes[cursor.scene_index];
        let curr = self.target(scene);
        let previous = cursor.previous_index.and_then(|i| scenes.get(i));
        let blend_frames = scene
            .transition
            .effective_frames(self.default_transition_frames);

        if let Some(prev_scene) = previous
            && cursor.local_frame < blend_frames
        {
            let prev = self.target(prev_scene);
            let p = eased_progress(
                cursor.local_frame as f64,
                [0.0, blend_frames as f64],
                Ease::InOut,
            );
            return CameraFrame {
                camera: CameraState::lerp(&prev, &curr, p),
                transition: Some(TransitionState {
                    kind: scene.transition.kind,
                    progress: p,
                    from_scene: prev_scene.id.clone(),
                    to_scene: scene.id.clone(),
                }),
            };
        }

        let drift = self.drift.offset(frame.0);
        CameraFrame {
            camera: CameraState {
                zoom: curr.zoom,
                pan_x: curr.pan_x + drift,
                pan_y: curr.pan_y + drift,
            },
            transition: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/choreo.rs"]
mod tests;
