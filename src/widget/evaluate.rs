use crate::animation::interp::{Extrapolate, clamped_lerp, interpolate};
use crate::animation::spring::spring;
use crate::foundation::core::{Fps, Point, Rgba8, Size};
use crate::interaction::events::InteractionMap;
use crate::interaction::magnet::magnetic_displacement;
use crate::widget::model::{Entrance, EntranceKind, FloatMotion, Widget, WidgetKind};
use serde::Serialize;

/// Caret blink half-period in frames.
pub const CARET_BLINK_FRAMES: u64 = 15;
/// Length of a pointer click pulse in frames.
pub const CLICK_PULSE_FRAMES: u64 = 10;

/// Everything a widget evaluation reads besides the widget itself.
#[derive(Debug, Clone, Copy)]
pub struct WidgetCtx<'a> {
    /// Composition frame rate.
    pub fps: Fps,
    /// Absolute frame; interaction timestamps live in this space.
    pub global_frame: u64,
    /// Recorded interaction log.
    pub interactions: &'a InteractionMap,
}

/// Visual state of one widget at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetState {
    /// Stacking order.
    pub z: i32,
    /// Top-left corner (pointer: tip) after float and magnetic offsets.
    pub position: Point,
    /// Unscaled size.
    pub size: Size,
    /// Scale about the widget center; may overshoot 1 during spring entrances.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Kind-specific state.
    pub content: WidgetContent,
}

/// Kind-specific part of [`WidgetState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetContent {
    /// Card/badge.
    Panel {
        /// Label text.
        label: Option<String>,
    },
    /// Partially revealed text.
    TypedText {
        /// Revealed prefix.
        visible_text: String,
        /// Caret visible this frame.
        caret: bool,
    },
    /// Mouse pointer.
    Pointer {
        /// Inside a click pulse.
        clicking: bool,
    },
}

/// Evaluate `widget` at `frame` (in the widget's own frame space).
///
/// Returns `None` before the entrance delay: the widget is absent, not merely transparent.
/// Referentially transparent: the result depends only on the arguments.
pub fn evaluate(widget: &Widget, frame: u64, ctx: &WidgetCtx<'_>) -> Option<WidgetState> {
    let entrance = &widget.entrance;
    if frame < entrance.delay_frames {
        return None;
    }
    let (entrance_scale, opacity) = entrance_progress(entrance, frame, ctx.fps);
    let style = &widget.style;

    let (anchor, mut position, scale, content) = match &widget.kind {
        WidgetKind::Panel { label } => (
            style.rect().center(),
            Point::new(style.x, style.y),
            entrance_scale,
            WidgetContent::Panel {
                label: label.clone(),
            },
        ),
        WidgetKind::TypedText { text, show_cursor } => {
            let (visible_text, caret) = typed_text(text, *show_cursor, entrance, frame);
            (
                style.rect().center(),
                Point::new(style.x, style.y),
                entrance_scale,
                WidgetContent::TypedText {
                    visible_text,
                    caret,
                },
            )
        }
        WidgetKind::Pointer {
            from,
            to,
            move_start,
            move_end,
            click_frame,
        } => {
            let tip = pointer_position(*from, *to, *move_start, *move_end, frame);
            let pulse = click_pulse(*click_frame, frame);
            (
                tip,
                tip,
                entrance_scale * pulse.unwrap_or(1.0),
                WidgetContent::Pointer {
                    clicking: pulse.is_some(),
                },
            )
        }
    };

    if let Some(f) = widget.float {
        position.y += float_offset(f, frame, entrance.delay_frames);
    }
    if let Some(m) = widget.magnet {
        position += magnetic_displacement(ctx.interactions, anchor, ctx.global_frame, ctx.fps, m);
    }

    Some(WidgetState {
        z: style.z,
        position,
        size: Size::new(style.width, style.height),
        scale,
        opacity,
        color: style.color,
        content,
    })
}

/// `(scale, opacity)` of the entrance at `frame >= delay`.
fn entrance_progress(entrance: &Entrance, frame: u64, fps: Fps) -> (f64, f64) {
    let elapsed = frame.saturating_sub(entrance.delay_frames) as f64;
    let fade = || {
        clamped_lerp(
            elapsed,
            [0.0, entrance.duration_frames as f64],
            [0.0, 1.0],
            Extrapolate::Clamp,
        )
    };
    let pop = || spring(elapsed, fps, entrance.spring, 0.0, 1.0);
    match entrance.kind {
        EntranceKind::None => (1.0, 1.0),
        EntranceKind::Pop => {
            let s = pop();
            (s, s.clamp(0.0, 1.0))
        }
        EntranceKind::Fade => (1.0, fade()),
        EntranceKind::ScaleFade => (pop(), fade()),
    }
}

/// Revealed prefix and caret visibility; typing starts at the entrance delay.
fn typed_text(text: &str, show_cursor: bool, entrance: &Entrance, frame: u64) -> (String, bool) {
    let start = entrance.delay_frames as f64;
    let end = start + entrance.duration_frames as f64;
    let len = text.chars().count();
    let progress = clamped_lerp(frame as f64, [start, end], [0.0, len as f64], Extrapolate::Clamp);
    let visible = (progress.floor().max(0.0) as usize).min(len);

    let caret = show_cursor
        && frame >= entrance.delay_frames
        && (frame / CARET_BLINK_FRAMES) % 2 == 0;
    (text.chars().take(visible).collect(), caret)
}

fn pointer_position(from: Point, to: Point, move_start: u64, move_end: u64, frame: u64) -> Point {
    let end = move_end.max(move_start);
    let t = clamped_lerp(
        frame as f64,
        [move_start as f64, end as f64],
        [0.0, 1.0],
        Extrapolate::Clamp,
    );
    from.lerp(to, t)
}

/// Scale pulse `1 -> 0.8 -> 1` while `click <= frame < click + 10`.
fn click_pulse(click_frame: Option<u64>, frame: u64) -> Option<f64> {
    let c = click_frame?;
    if frame < c || frame - c >= CLICK_PULSE_FRAMES {
        return None;
    }
    let half = (CLICK_PULSE_FRAMES / 2) as f64;
    Some(interpolate(
        (frame - c) as f64,
        &[0.0, half, CLICK_PULSE_FRAMES as f64],
        &[1.0, 0.8, 1.0],
    ))
}

fn float_offset(f: FloatMotion, frame: u64, delay: u64) -> f64 {
    let period = if f.period.is_finite() && f.period > 0.0 {
        f.period
    } else {
        FloatMotion::default().period
    };
    let amplitude = if f.amplitude.is_finite() {
        f.amplitude
    } else {
        0.0
    };
    (frame.saturating_add(delay) as f64 / period).sin() * amplitude
}

#[cfg(test)]
#[path = "../../tests/unit/widget/evaluate.rs"]
mod tests;
