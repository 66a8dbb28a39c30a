//! Storyframe is a deterministic, frame-indexed choreography engine for product-demo videos.
//!
//! Given a validated [`Composition`] (scenes, anchors, recorded interactions, overlay widgets),
//! every frame can be evaluated independently and in any order:
//!
//! - Build an [`Engine`] once
//! - Call [`Engine::eval_frame`] for single frames or [`Engine::eval_range`] for ranges
//! - Hand the resulting [`FrameSnapshot`] to a renderer
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Interpolation, easing and spring primitives.
pub mod animation;
/// Camera targets, blends and drift.
pub mod camera;
/// Engine and frame snapshots.
pub mod eval;
/// Recorded interaction log and pointer physics.
pub mod interaction;
/// Boundary scene model.
pub mod scene;
/// Global frame to scene resolution.
pub mod timeline;
/// Overlay widget models and evaluators.
pub mod widget;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Size, Vec2,
};
pub use crate::foundation::error::{StoryframeError, StoryframeResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{Extrapolate, Lerp, clamped_lerp, interpolate};
pub use crate::animation::spring::{SpringConfig, measure_spring, spring};
pub use crate::camera::choreo::{CameraFrame, CameraRig, DriftOpts, TransitionState};
pub use crate::camera::state::CameraState;
pub use crate::eval::engine::{Engine, EngineOpts, RangeStats, evaluate};
pub use crate::eval::snapshot::{FrameFingerprint, FrameSnapshot};
pub use crate::interaction::events::{InteractionEvent, InteractionKind, InteractionMap};
pub use crate::interaction::magnet::{MagnetConfig, MagnetMode, magnetic_displacement};
pub use crate::scene::composition::Composition;
pub use crate::scene::model::{AnchorRect, CameraTarget, Scene, Transition, TransitionKind};
pub use crate::timeline::resolve::{SceneCursor, Timeline, resolve_frame};
pub use crate::widget::evaluate::{WidgetContent, WidgetState};
pub use crate::widget::model::{Entrance, EntranceKind, FloatMotion, Widget, WidgetKind, WidgetStyle};
