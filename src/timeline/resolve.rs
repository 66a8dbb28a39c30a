use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::scene::model::Scene;

/// Where a global frame lands on the scene timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SceneCursor {
    /// Index of the active scene.
    pub scene_index: usize,
    /// Index of the nearest earlier scene that is ever active, if any.
    pub previous_index: Option<usize>,
    /// Global frame the active scene starts at.
    pub scene_start: u64,
    /// `frame - scene_start`. Exceeds `duration_frames` only past the end of the timeline.
    pub local_frame: u64,
    /// Active scene length in frames.
    pub duration_frames: u64,
}

/// Immutable prefix table of scene start frames.
///
/// Built once from the plan; resolving a frame is a binary search and never consults previously
/// resolved frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    starts: Vec<u64>,
    durations: Vec<u64>,
    total: u64,
}

impl Timeline {
    /// Build the table. An empty plan is an [`StoryframeError::EmptyTimeline`].
    pub fn new(scenes: &[Scene], fps: Fps) -> StoryframeResult<Self> {
        if scenes.is_empty() {
            return Err(StoryframeError::EmptyTimeline);
        }
        fps.validate()?;

        let mut starts = Vec::with_capacity(scenes.len());
        let mut durations = Vec::with_capacity(scenes.len());
        let mut acc = 0u64;
        for s in scenes {
            let d = fps.secs_to_frames_round(s.duration_seconds);
            starts.push(acc);
            durations.push(d);
            acc = acc.saturating_add(d);
        }
        Ok(Self {
            starts,
            durations,
            total: acc,
        })
    }

    /// Total length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.total
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always `false`; construction rejects empty plans.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start frame and length of scene `index`.
    pub fn span(&self, index: usize) -> Option<(u64, u64)> {
        Some((*self.starts.get(index)?, *self.durations.get(index)?))
    }

    /// Resolve `frame` to the active scene.
    ///
    /// Intervals are half-open, so a boundary frame belongs to the later scene. Frames past the
    /// end stay on the last scene.
    pub fn resolve(&self, frame: FrameIndex) -> SceneCursor {
        let f = frame.0;
        let last = self.starts.len() - 1;
        let scene_index = if f >= self.total {
            last
        } else {
            // Last start <= f; zero-length scenes share a start with their successor and lose.
            self.starts.partition_point(|&s| s <= f).saturating_sub(1)
        };
        let scene_start = self.starts[scene_index];
        SceneCursor {
            scene_index,
            previous_index: (0..scene_index).rev().find(|&i| self.durations[i] > 0),
            scene_start,
            local_frame: f - scene_start,
            duration_frames: self.durations[scene_index],
        }
    }
}

/// One-shot resolution straight from the scene list, without a prebuilt [`Timeline`].
pub fn resolve_frame(
    scenes: &[Scene],
    fps: Fps,
    frame: FrameIndex,
) -> StoryframeResult<SceneCursor> {
    Ok(Timeline::new(scenes, fps)?.resolve(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
