use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::interaction::events::InteractionMap;
use crate::scene::model::{AnchorRect, Scene};
use crate::widget::model::Widget;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON boundary object: the plan plus everything the engine reads while evaluating it.
///
/// Produced by external plan-generation and asset pipelines; read-only for the lifetime of a
/// render.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas size.
    pub canvas: Canvas,
    /// The plan: scenes in playback order.
    pub scenes: Vec<Scene>,
    /// UI element bounding boxes keyed by anchor id.
    #[serde(default)]
    pub anchors: BTreeMap<String, AnchorRect>,
    /// Recorded pointer/keyboard events.
    #[serde(default)]
    pub interactions: InteractionMap,
    /// Overlay widgets.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Composition {
    /// Parse a composition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StoryframeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StoryframeError::serde(format!("parse composition JSON: {e}")))
    }

    /// Parse a composition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StoryframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StoryframeError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the invariants evaluation relies on.
    ///
    /// Optional parameters are not checked here; they degrade to defaults during evaluation.
    pub fn validate(&self) -> StoryframeResult<()> {
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StoryframeError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.scenes.is_empty() {
            return Err(StoryframeError::EmptyTimeline);
        }

        let mut scene_ids = BTreeSet::new();
        for scene in &self.scenes {
            if !(scene.duration_seconds.is_finite() && scene.duration_seconds > 0.0) {
                return Err(StoryframeError::validation(format!(
                    "scene '{}' duration_seconds must be finite and > 0, got {}",
                    scene.id, scene.duration_seconds
                )));
            }
            if !scene_ids.insert(scene.id.as_str()) {
                tracing::debug!(scene = %scene.id, "duplicate scene id");
            }
        }

        let mut widget_ids = BTreeSet::new();
        for w in &self.widgets {
            if !widget_ids.insert(w.id.as_str()) {
                return Err(StoryframeError::validation(format!(
                    "duplicate widget id '{}'",
                    w.id
                )));
            }
        }
        Ok(())
    }

    /// Total timeline length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.scenes
            .iter()
            .map(|s| self.fps.secs_to_frames_round(s.duration_seconds))
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
