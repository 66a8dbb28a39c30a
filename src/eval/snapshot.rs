use crate::camera::choreo::TransitionState;
use crate::camera::state::CameraState;
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::math::Fnv1a64;
use crate::interaction::events::ActiveClick;
use crate::widget::evaluate::{WidgetContent, WidgetState};
use std::collections::BTreeMap;

/// Complete visual state of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Global frame this snapshot was evaluated at.
    pub frame: FrameIndex,
    /// Id of the active scene.
    pub scene_id: String,
    /// Index of the active scene in the plan.
    pub scene_index: usize,
    /// Frame offset inside the active scene.
    pub local_frame: u64,
    /// Camera applied to the whole frame.
    pub camera: CameraState,
    /// Scene blend in progress, if any.
    pub transition: Option<TransitionState>,
    /// Most recent recorded pointer position.
    pub pointer: Option<Point>,
    /// Recorded click still inside its display window.
    pub click: Option<ActiveClick>,
    /// Every declared widget by id; `None` while it is absent.
    pub widgets: BTreeMap<String, Option<WidgetState>>,
}

/// 128-bit digest of a [`FrameSnapshot`], stable across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High lane.
    pub hi: u64,
    /// Low lane.
    pub lo: u64,
}

impl FrameSnapshot {
    /// Stable digest of everything in the snapshot, including the frame index.
    pub fn fingerprint(&self) -> FrameFingerprint {
        let mut d = Digest::new();
        d.u64(self.frame.0);
        d.u64(self.local_frame);
        self.write_content(&mut d);
        d.finish()
    }

    /// Digest without the global and local frame indices; equal for visually identical frames.
    pub fn content_fingerprint(&self) -> FrameFingerprint {
        let mut d = Digest::new();
        self.write_content(&mut d);
        d.finish()
    }

    fn write_content(&self, d: &mut Digest) {
        d.str(&self.scene_id);
        d.u64(self.scene_index as u64);
        d.f64(self.camera.zoom);
        d.f64(self.camera.pan_x);
        d.f64(self.camera.pan_y);

        match &self.transition {
            Some(tr) => {
                d.u8(1);
                d.u8(tr.kind as u8);
                d.f64(tr.progress);
                d.str(&tr.from_scene);
                d.str(&tr.to_scene);
            }
            None => d.u8(0),
        }

        match self.pointer {
            Some(p) => {
                d.u8(1);
                d.f64(p.x);
                d.f64(p.y);
            }
            None => d.u8(0),
        }
        match self.click {
            Some(c) => {
                d.u8(1);
                d.f64(c.position.x);
                d.f64(c.position.y);
                d.u64(c.age_frames);
            }
            None => d.u8(0),
        }

        d.u64(self.widgets.len() as u64);
        for (id, state) in &self.widgets {
            d.str(id);
            match state {
                Some(s) => {
                    d.u8(1);
                    write_widget(d, s);
                }
                None => d.u8(0),
            }
        }
    }
}

fn write_widget(d: &mut Digest, s: &WidgetState) {
    d.u64(s.z as i64 as u64);
    d.f64(s.position.x);
    d.f64(s.position.y);
    d.f64(s.size.width);
    d.f64(s.size.height);
    d.f64(s.scale);
    d.f64(s.opacity);
    d.bytes(&[s.color.r, s.color.g, s.color.b, s.color.a]);
    match &s.content {
        WidgetContent::Panel { label } => {
            d.u8(0);
            match label {
                Some(l) => {
                    d.u8(1);
                    d.str(l);
                }
                None => d.u8(0),
            }
        }
        WidgetContent::TypedText {
            visible_text,
            caret,
        } => {
            d.u8(1);
            d.str(visible_text);
            d.u8(u8::from(*caret));
        }
        WidgetContent::Pointer { clicking } => {
            d.u8(2);
            d.u8(u8::from(*clicking));
        }
    }
}

/// Two independently seeded FNV lanes fed the same bytes.
struct Digest {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Digest {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn bytes(&mut self, v: &[u8]) {
        self.a.write_bytes(v);
        self.b.write_bytes(v);
    }

    fn u8(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        // -0.0 and 0.0 are the same visual state.
        let v = if v == 0.0 { 0.0 } else { v };
        self.u64(v.to_bits());
    }

    fn str(&mut self, v: &str) {
        self.u64(v.len() as u64);
        self.bytes(v.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/snapshot.rs"]
mod tests;
