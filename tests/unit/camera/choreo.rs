use super::*;
use crate::foundation::core::Fps;
use crate::scene::model::Transition;
use crate::timeline::resolve::Timeline;

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

fn scene(id: &str, secs: f64) -> Scene {
    Scene {
        id: id.to_owned(),
        duration_seconds: secs,
        transition: Transition::default(),
        camera_target: None,
        visual_anchor_id: None,
        motion_locked: false,
    }
}

fn anchors() -> BTreeMap<String, AnchorRect> {
    let mut m = BTreeMap::new();
    m.insert(
        "btn".to_owned(),
        AnchorRect {
            x: 800.0,
            y: 500.0,
            width: 200.0,
            height: 80.0,
        },
    );
    m
}

fn no_drift() -> DriftOpts {
    DriftOpts {
        enabled: false,
        ..DriftOpts::default()
    }
}

#[test]
fn anchor_zoom_is_always_clamped() {
    for width in [1.0, 10.0, 200.0, 320.0, 500.0, 1920.0, 10_000.0] {
        for canvas_w in [320u32, 1280, 1920, 3840] {
            let a = AnchorRect {
                x: 0.0,
                y: 0.0,
                width,
                height: 10.0,
            };
            let t = anchor_target(
                &a,
                Canvas {
                    width: canvas_w,
                    height: 720,
                },
            )
            .unwrap();
            assert!((MIN_ANCHOR_ZOOM..=MAX_ANCHOR_ZOOM).contains(&t.zoom));
        }
    }
}

#[test]
fn anchor_target_pans_by_half_frame_over_zoom() {
    let a = anchors()["btn"];
    let t = anchor_target(&a, canvas()).unwrap();
    assert_eq!(t.zoom, 3.0);
    // Anchor center is (900, 540).
    assert!((t.pan_x - (320.0 - 900.0)).abs() < 1e-9);
    assert!((t.pan_y - (180.0 - 540.0)).abs() < 1e-9);

    // The anchor center scales away from the canvas center, then the pan shifts it.
    let projected = t.project(a.center(), canvas());
    assert!((projected.x - (960.0 + 3.0 * -60.0 - 580.0)).abs() < 1e-9);
    assert!((projected.y - (540.0 - 360.0)).abs() < 1e-9);
}

#[test]
fn malformed_anchor_is_rejected() {
    let a = AnchorRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 10.0,
    };
    assert_eq!(anchor_target(&a, canvas()), None);
}

#[test]
fn target_priority_order() {
    let anchors = anchors();
    let rig = CameraRig::new(canvas(), &anchors, no_drift(), DEFAULT_TRANSITION_FRAMES);

    let mut s = scene("s", 1.0);
    s.visual_anchor_id = Some("btn".to_owned());
    s.camera_target = Some(CameraTarget {
        zoom: Some(2.0),
        x: Some(5.0),
        y: None,
    });
    assert_eq!(rig.target(&s).zoom, 3.0);

    s.motion_locked = true;
    assert_eq!(rig.target(&s), CameraState::IDENTITY);

    s.motion_locked = false;
    s.visual_anchor_id = Some("missing".to_owned());
    assert_eq!(
        rig.target(&s),
        CameraState {
            zoom: 2.0,
            pan_x: 5.0,
            pan_y: 0.0
        }
    );

    s.camera_target = None;
    assert_eq!(rig.target(&s), CameraState::IDENTITY);
}

#[test]
fn malformed_manual_target_uses_defaults() {
    let anchors = BTreeMap::new();
    let rig = CameraRig::new(canvas(), &anchors, no_drift(), DEFAULT_TRANSITION_FRAMES);
    let mut s = scene("s", 1.0);
    s.camera_target = Some(CameraTarget {
        zoom: Some(-3.0),
        x: Some(f64::NAN),
        y: Some(7.0),
    });
    assert_eq!(
        rig.target(&s),
        CameraState {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 7.0
        }
    );
}

#[test]
fn blends_from_previous_target_then_settles() {
    let anchors = anchors();
    let rig = CameraRig::new(canvas(), &anchors, no_drift(), DEFAULT_TRANSITION_FRAMES);
    let mut b = scene("b", 3.0);
    b.visual_anchor_id = Some("btn".to_owned());
    let scenes = vec![scene("a", 2.0), b];
    let tl = Timeline::new(&scenes, Fps::new(30, 1).unwrap()).unwrap();

    let at = |f: u64| rig.frame(&scenes, &tl.resolve(FrameIndex(f)), FrameIndex(f));

    let start = at(60);
    assert_eq!(start.camera, CameraState::IDENTITY);
    assert_eq!(start.transition.as_ref().unwrap().progress, 0.0);

    let mid = at(75);
    assert!((mid.camera.zoom - 2.0).abs() < 1e-5);
    let tr = mid.transition.unwrap();
    assert_eq!((tr.from_scene.as_str(), tr.to_scene.as_str()), ("a", "b"));

    let settled = at(90);
    assert!(settled.transition.is_none());
    assert_eq!(settled.camera.zoom, 3.0);
}

#[test]
fn cut_and_first_scene_never_blend() {
    let anchors = anchors();
    let rig = CameraRig::new(canvas(), &anchors, no_drift(), DEFAULT_TRANSITION_FRAMES);
    let mut a = scene("a", 1.0);
    a.visual_anchor_id = Some("btn".to_owned());
    let mut b = scene("b", 1.0);
    b.transition = Transition {
        kind: TransitionKind::Cut,
        duration_frames: Some(20),
    };
    let scenes = vec![a, b];
    let tl = Timeline::new(&scenes, Fps::new(30, 1).unwrap()).unwrap();

    let first = rig.frame(&scenes, &tl.resolve(FrameIndex(0)), FrameIndex(0));
    assert_eq!(first.camera.zoom, 3.0);
    assert!(first.transition.is_none());

    let cut = rig.frame(&scenes, &tl.resolve(FrameIndex(30)), FrameIndex(30));
    assert_eq!(cut.camera, CameraState::IDENTITY);
    assert!(cut.transition.is_none());
}

#[test]
fn blend_skips_a_scene_that_is_never_shown() {
    let anchors = BTreeMap::new();
    let rig = CameraRig::new(canvas(), &anchors, no_drift(), DEFAULT_TRANSITION_FRAMES);
    let mut a = scene("a", 1.0);
    a.motion_locked = true;
    let mut blink = scene("blink", 0.01);
    blink.camera_target = Some(CameraTarget {
        zoom: Some(3.0),
        x: Some(-500.0),
        y: Some(-500.0),
    });
    let scenes = vec![a, blink, scene("c", 1.0)];
    let tl = Timeline::new(&scenes, Fps::new(30, 1).unwrap()).unwrap();

    let f = rig.frame(&scenes, &tl.resolve(FrameIndex(30)), FrameIndex(30));
    assert_eq!(f.camera, CameraState::IDENTITY);
    let tr = f.transition.unwrap();
    assert_eq!((tr.from_scene.as_str(), tr.to_scene.as_str()), ("a", "c"));
}

#[test]
fn drift_stays_within_amplitude() {
    let d = DriftOpts::default();
    assert!((d.max_offset() - 0.5).abs() < 1e-12);
    for f in 0..500 {
        assert!(d.offset(f).abs() <= d.max_offset() + 1e-12);
    }
    assert_eq!(d.offset(0), 0.0);
    assert_eq!(no_drift().offset(31), 0.0);
}

#[test]
fn settled_camera_adds_drift_on_both_axes() {
    let anchors = BTreeMap::new();
    let rig = CameraRig::new(canvas(), &anchors, DriftOpts::default(), DEFAULT_TRANSITION_FRAMES);
    let scenes = vec![scene("a", 10.0)];
    let tl = Timeline::new(&scenes, Fps::new(30, 1).unwrap()).unwrap();
    let f = FrameIndex(31);
    let c = rig.frame(&scenes, &tl.resolve(f), f).camera;
    let expected = (31.0_f64 * 0.05).sin() * 5.0 * 0.1;
    assert_eq!(c.zoom, 1.0);
    assert!((c.pan_x - expected).abs() < 1e-12);
    assert!((c.pan_y - expected).abs() < 1e-12);
}
