use super::*;

fn scene(id: &str, secs: f64) -> Scene {
    Scene {
        id: id.to_owned(),
        duration_seconds: secs,
        transition: Default::default(),
        camera_target: None,
        visual_anchor_id: None,
        motion_locked: false,
    }
}

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn empty_plan_is_an_error() {
    assert!(matches!(
        Timeline::new(&[], fps30()),
        Err(StoryframeError::EmptyTimeline)
    ));
    assert!(resolve_frame(&[], fps30(), FrameIndex(0)).is_err());
}

#[test]
fn boundary_frame_belongs_to_later_scene() {
    let scenes = [scene("a", 2.0), scene("b", 3.0)];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    assert_eq!(tl.duration_frames(), 150);

    let c = tl.resolve(FrameIndex(59));
    assert_eq!((c.scene_index, c.local_frame, c.previous_index), (0, 59, None));

    let c = tl.resolve(FrameIndex(60));
    assert_eq!((c.scene_index, c.local_frame), (1, 0));
    assert_eq!(c.previous_index, Some(0));
    assert_eq!(c.scene_start, 60);
    assert_eq!(c.duration_frames, 90);
}

#[test]
fn past_the_end_clamps_to_last_scene() {
    let scenes = [scene("a", 2.0), scene("b", 3.0)];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    let c = tl.resolve(FrameIndex(10_000));
    assert_eq!(c.scene_index, 1);
    assert_eq!(c.local_frame, 10_000 - 60);
}

#[test]
fn every_frame_has_exactly_one_scene_with_local_frame_in_range() {
    let scenes = [
        scene("a", 1.0),
        scene("b", 0.5),
        scene("c", 2.25),
        scene("d", 0.1),
    ];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    let mut per_scene = vec![0u64; scenes.len()];
    for f in 0..tl.duration_frames() {
        let c = tl.resolve(FrameIndex(f));
        assert!(c.local_frame < c.duration_frames, "frame {f}");
        let (start, dur) = tl.span(c.scene_index).unwrap();
        assert!(start <= f && f < start + dur);
        per_scene[c.scene_index] += 1;
    }
    for (i, n) in per_scene.iter().enumerate() {
        assert_eq!(*n, tl.span(i).unwrap().1);
    }
}

#[test]
fn scene_frames_are_rounded() {
    // 0.49s * 30 = 14.7 -> 15, 0.51s * 30 = 15.3 -> 15.
    let scenes = [scene("a", 0.49), scene("b", 0.51)];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    assert_eq!(tl.span(0), Some((0, 15)));
    assert_eq!(tl.span(1), Some((15, 15)));
}

#[test]
fn zero_length_scene_is_never_active() {
    // 0.01s rounds to 0 frames.
    let scenes = [scene("a", 1.0), scene("blink", 0.01), scene("c", 1.0)];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    let c = tl.resolve(FrameIndex(30));
    assert_eq!(c.scene_index, 2);
    assert_eq!(c.previous_index, Some(0));
}

#[test]
fn previous_scene_skips_every_zero_length_scene() {
    let scenes = [
        scene("a", 1.0),
        scene("z1", 0.0),
        scene("z2", 0.01),
        scene("c", 1.0),
    ];
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    assert_eq!(tl.resolve(FrameIndex(0)).previous_index, None);
    let c = tl.resolve(FrameIndex(30));
    assert_eq!(c.scene_index, 3);
    assert_eq!(c.previous_index, Some(0));

    let leading = [scene("z", 0.0), scene("b", 1.0)];
    let tl = Timeline::new(&leading, fps30()).unwrap();
    let c = tl.resolve(FrameIndex(0));
    assert_eq!(c.scene_index, 1);
    assert_eq!(c.previous_index, None);
}

#[test]
fn resolution_is_order_independent() {
    let scenes = [scene("a", 2.0), scene("b", 3.0)];
    let frames = [149u64, 0, 60, 59, 61, 149, 0];
    let first: Vec<_> = frames
        .iter()
        .map(|&f| resolve_frame(&scenes, fps30(), FrameIndex(f)).unwrap())
        .collect();
    let tl = Timeline::new(&scenes, fps30()).unwrap();
    for (i, &f) in frames.iter().enumerate().rev() {
        assert_eq!(tl.resolve(FrameIndex(f)), first[i]);
    }
}
