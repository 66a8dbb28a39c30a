use crate::foundation::core::Point;
use serde::{Deserialize, Serialize};

/// Kind of recorded input event.
///
/// Accepts `cursor-move`, `cursor_move`, `mousemove` and friends; unrecognized kinds are kept as
/// `Other` and ignored by the resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum InteractionKind {
    /// Pointer moved to `coords`.
    CursorMove,
    /// Pointer clicked at `coords`.
    Click,
    /// Scroll gesture at `coords`.
    Scroll,
    /// Key press (coords are where the pointer was).
    Key,
    /// Anything else.
    Other,
}

impl From<String> for InteractionKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cursor_move" | "mousemove" | "mouse_move" | "move" | "pointer_move" => {
                Self::CursorMove
            }
            "click" | "mousedown" | "mouse_down" | "tap" => Self::Click,
            "scroll" | "wheel" => Self::Scroll,
            "key" | "keydown" | "key_down" | "keypress" => Self::Key,
            _ => Self::Other,
        }
    }
}

/// One timestamped event of the interaction log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Event kind.
    pub kind: InteractionKind,
    /// Global frame the event was recorded at.
    pub timestamp_frame: u64,
    /// Pointer position in output-pixel space.
    pub coords: Point,
}

/// A click that is still inside its display window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveClick {
    /// Where the click landed.
    pub position: Point,
    /// Frames since the click, `0` on the click frame.
    pub age_frames: u64,
}

/// Insertion-ordered interaction log.
///
/// Callers may append in any order; every query scans the whole log, so results never depend on
/// sort order or on previously evaluated frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionMap {
    events: Vec<InteractionEvent>,
}

impl From<Vec<InteractionEvent>> for InteractionMap {
    fn from(events: Vec<InteractionEvent>) -> Self {
        Self { events }
    }
}

impl InteractionMap {
    /// Recorded events in insertion order.
    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    /// Return `true` when no events were recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event of `kind` recorded at or before `frame`.
    ///
    /// Events sharing a timestamp resolve to the one inserted last.
    pub fn latest(&self, kind: InteractionKind, frame: u64) -> Option<&InteractionEvent> {
        self.events
            .iter()
            .filter(|e| e.kind == kind && e.timestamp_frame <= frame)
            .fold(None, |best: Option<&InteractionEvent>, e| match best {
                Some(b) if b.timestamp_frame > e.timestamp_frame => Some(b),
                _ => Some(e),
            })
    }

    /// Where the pointer most recently was at `frame`.
    pub fn pointer_at(&self, frame: u64) -> Option<Point> {
        self.latest(InteractionKind::CursorMove, frame)
            .map(|e| e.coords)
    }

    /// Most recent click at or before `frame` that is younger than `window_frames`.
    pub fn click_at(&self, frame: u64, window_frames: u64) -> Option<ActiveClick> {
        let e = self.latest(InteractionKind::Click, frame)?;
        let age_frames = frame - e.timestamp_frame;
        (age_frames < window_frames).then_some(ActiveClick {
            position: e.coords,
            age_frames,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/events.rs"]
mod tests;
