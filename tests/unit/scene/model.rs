use super::*;

#[test]
fn scene_defaults_fill_missing_fields() {
    let s: Scene = serde_json::from_str(r#"{"id":"intro","duration_seconds":2.5}"#).unwrap();
    assert_eq!(s.transition, Transition::default());
    assert_eq!(s.transition.kind, TransitionKind::Fade);
    assert!(s.camera_target.is_none());
    assert!(s.visual_anchor_id.is_none());
    assert!(!s.motion_locked);
}

#[test]
fn transition_kind_aliases_and_unknowns() {
    let parse = |s: &str| -> TransitionKind { serde_json::from_str(&format!("\"{s}\"")).unwrap() };
    assert_eq!(parse("cut"), TransitionKind::Cut);
    assert_eq!(parse("Hard-Cut"), TransitionKind::Cut);
    assert_eq!(parse("push"), TransitionKind::Slide);
    assert_eq!(parse("wipe"), TransitionKind::Wipe);
    assert_eq!(parse("zoom_through"), TransitionKind::Zoom);
    assert_eq!(parse("dissolve"), TransitionKind::Fade);
    assert_eq!(parse("spin"), TransitionKind::Fade);
}

#[test]
fn effective_frames_zero_only_for_cut() {
    let cut = Transition {
        kind: TransitionKind::Cut,
        duration_frames: Some(12),
    };
    assert_eq!(cut.effective_frames(30), 0);

    let slide = Transition {
        kind: TransitionKind::Slide,
        duration_frames: Some(12),
    };
    assert_eq!(slide.effective_frames(30), 12);
    assert_eq!(Transition::default().effective_frames(30), 30);
}

#[test]
fn anchor_accepts_short_field_names() {
    let a: AnchorRect = serde_json::from_str(r#"{"x":10,"y":20,"w":30,"h":40}"#).unwrap();
    assert_eq!(a.width, 30.0);
    assert_eq!(a.center(), Point::new(25.0, 40.0));
    assert_eq!(a.to_rect(), Rect::new(10.0, 20.0, 40.0, 60.0));
    assert!(a.is_well_formed());
}

#[test]
fn degenerate_anchors_are_not_well_formed() {
    let base = AnchorRect {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
    };
    assert!(
        !AnchorRect {
            height: -1.0,
            ..base
        }
        .is_well_formed()
    );
    assert!(
        !AnchorRect {
            x: f64::NAN,
            ..base
        }
        .is_well_formed()
    );
}
