use crate::camera::choreo::{CameraRig, DEFAULT_TRANSITION_FRAMES, DriftOpts};
use crate::eval::snapshot::FrameSnapshot;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{StoryframeError, StoryframeResult};
use crate::scene::composition::Composition;
use crate::timeline::resolve::{SceneCursor, Timeline};
use crate::widget::evaluate::{WidgetCtx, WidgetState, evaluate as evaluate_widget};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Default for [`EngineOpts::click_window_frames`].
pub const DEFAULT_CLICK_WINDOW_FRAMES: u64 = 15;

/// Engine-level knobs that are not part of the composition itself.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOpts {
    /// Evaluate ranges on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Blend length for transitions that do not set one.
    pub default_transition_frames: u64,
    /// Idle camera wobble.
    pub drift: DriftOpts,
    /// Frames a recorded click stays reported in snapshots.
    pub click_window_frames: u64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            default_transition_frames: DEFAULT_TRANSITION_FRAMES,
            drift: DriftOpts::default(),
            click_window_frames: DEFAULT_CLICK_WINDOW_FRAMES,
        }
    }
}

/// Counters reported by [`Engine::eval_range_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames visually identical to the frame before them.
    pub frames_static: u64,
}

/// A validated composition ready for random-access frame evaluation.
///
/// Holds no per-frame state; every call is independent, so one engine can be shared across
/// threads and queried in any frame order.
#[derive(Clone, Debug)]
pub struct Engine {
    comp: Composition,
    timeline: Timeline,
    opts: EngineOpts,
}

impl Engine {
    /// Validate `comp` and build its timeline.
    #[tracing::instrument(skip_all, fields(scenes = comp.scenes.len(), widgets = comp.widgets.len()))]
    pub fn new(comp: Composition, opts: EngineOpts) -> StoryframeResult<Self> {
        comp.validate()?;
        let timeline = Timeline::new(&comp.scenes, comp.fps)?;
        tracing::debug!(
            duration_frames = timeline.duration_frames(),
            "composition validated"
        );
        Ok(Self {
            comp,
            timeline,
            opts,
        })
    }

    /// The validated composition.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Scene start table.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Options this engine was built with.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Total length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.timeline.duration_frames()
    }

    /// Camera rig over this composition's canvas and anchors.
    pub fn camera_rig(&self) -> CameraRig<'_> {
        CameraRig::new(
            self.comp.canvas,
            &self.comp.anchors,
            self.opts.drift,
            self.opts.default_transition_frames,
        )
    }

    /// Evaluate one frame. Frames past the end clamp to the last scene.
    pub fn eval_frame(&self, frame: FrameIndex) -> FrameSnapshot {
        let cursor = self.timeline.resolve(frame);
        let scene = &self.comp.scenes[cursor.scene_index];
        let cam = self.camera_rig().frame(&self.comp.scenes, &cursor, frame);
        tracing::trace!(frame = frame.0, scene = %scene.id, "frame");

        FrameSnapshot {
            frame,
            scene_id: scene.id.clone(),
            scene_index: cursor.scene_index,
            local_frame: cursor.local_frame,
            camera: cam.camera,
            transition: cam.transition,
            pointer: self.comp.interactions.pointer_at(frame.0),
            click: self
                .comp
                .interactions
                .click_at(frame.0, self.opts.click_window_frames),
            widgets: self.eval_widgets(frame, &cursor),
        }
    }

    fn eval_widgets(
        &self,
        frame: FrameIndex,
        cursor: &SceneCursor,
    ) -> BTreeMap<String, Option<WidgetState>> {
        let active_id = self.comp.scenes[cursor.scene_index].id.as_str();
        let ctx = WidgetCtx {
            fps: self.comp.fps,
            global_frame: frame.0,
            interactions: &self.comp.interactions,
        };
        self.comp
            .widgets
            .iter()
            .map(|w| {
                let state = match w.scene.as_deref() {
                    None => evaluate_widget(w, frame.0, &ctx),
                    Some(id) if id == active_id => evaluate_widget(w, cursor.local_frame, &ctx),
                    Some(_) => None,
                };
                (w.id.clone(), state)
            })
            .collect()
    }

    /// Evaluate a half-open frame range, in frame order.
    pub fn eval_range(&self, range: FrameRange) -> StoryframeResult<Vec<FrameSnapshot>> {
        self.eval_range_with_stats(range).map(|(frames, _)| frames)
    }

    /// [`Engine::eval_range`] plus counters.
    ///
    /// With `opts.parallel` the frames are evaluated on a dedicated rayon pool; results are
    /// identical to sequential evaluation.
    #[tracing::instrument(
        skip(self),
        fields(frames = range.len_frames(), parallel = self.opts.parallel)
    )]
    pub fn eval_range_with_stats(
        &self,
        range: FrameRange,
    ) -> StoryframeResult<(Vec<FrameSnapshot>, RangeStats)> {
        if range.is_empty() {
            return Err(StoryframeError::validation(
                "evaluation range must be non-empty",
            ));
        }

        let frames = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            let indices: Vec<u64> = (range.start.0..range.end.0).collect();
            pool.install(|| {
                indices
                    .par_iter()
                    .map(|&f| self.eval_frame(FrameIndex(f)))
                    .collect::<Vec<_>>()
            })
        } else {
            (range.start.0..range.end.0)
                .map(|f| self.eval_frame(FrameIndex(f)))
                .collect::<Vec<_>>()
        };

        let stats = range_stats(&frames);
        tracing::debug!(
            frames_total = stats.frames_total,
            frames_static = stats.frames_static,
            "evaluated range"
        );
        Ok((frames, stats))
    }
}

fn range_stats(frames: &[FrameSnapshot]) -> RangeStats {
    let mut stats = RangeStats {
        frames_total: frames.len() as u64,
        frames_static: 0,
    };
    let mut prev = None;
    for f in frames {
        let key = f.content_fingerprint();
        if prev == Some(key) {
            stats.frames_static += 1;
        }
        prev = Some(key);
    }
    stats
}

/// One-shot evaluation with default options.
pub fn evaluate(comp: &Composition, frame: FrameIndex) -> StoryframeResult<FrameSnapshot> {
    Ok(Engine::new(comp.clone(), EngineOpts::default())?.eval_frame(frame))
}

fn build_thread_pool(threads: Option<usize>) -> StoryframeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StoryframeError::validation(
            "engine 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoryframeError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/engine.rs"]
mod tests;
