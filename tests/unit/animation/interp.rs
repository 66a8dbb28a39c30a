use super::*;

#[test]
fn clamps_both_sides_by_default() {
    let w = [10.0, 30.0];
    assert_eq!(clamped_lerp(0.0, w, [0.0, 5.0], Extrapolate::Clamp), 0.0);
    assert_eq!(clamped_lerp(20.0, w, [0.0, 5.0], Extrapolate::Clamp), 2.5);
    assert_eq!(clamped_lerp(99.0, w, [0.0, 5.0], Extrapolate::Clamp), 5.0);
}

#[test]
fn one_sided_and_unclamped_extrapolation() {
    let w = [0.0, 10.0];
    let v = [0.0, 1.0];
    assert_eq!(clamped_lerp(-5.0, w, v, Extrapolate::ClampLeft), 0.0);
    assert_eq!(clamped_lerp(20.0, w, v, Extrapolate::ClampLeft), 2.0);
    assert_eq!(clamped_lerp(-5.0, w, v, Extrapolate::ClampRight), -0.5);
    assert_eq!(clamped_lerp(20.0, w, v, Extrapolate::ClampRight), 1.0);
    assert_eq!(clamped_lerp(-5.0, w, v, Extrapolate::Extend), -0.5);
    assert_eq!(clamped_lerp(20.0, w, v, Extrapolate::Extend), 2.0);
}

#[test]
fn descending_values_follow_falloff() {
    let range = 400.0;
    assert_eq!(
        clamped_lerp(0.0, [0.0, range], [1.0, 0.0], Extrapolate::Clamp),
        1.0
    );
    assert_eq!(
        clamped_lerp(100.0, [0.0, range], [1.0, 0.0], Extrapolate::Clamp),
        0.75
    );
    assert_eq!(
        clamped_lerp(range, [0.0, range], [1.0, 0.0], Extrapolate::Clamp),
        0.0
    );
}

#[test]
fn degenerate_window_steps() {
    assert_eq!(clamped_lerp(4.0, [5.0, 5.0], [1.0, 2.0], Extrapolate::Clamp), 1.0);
    assert_eq!(clamped_lerp(5.0, [5.0, 5.0], [1.0, 2.0], Extrapolate::Clamp), 2.0);
}

#[test]
fn piecewise_pulse_keys() {
    let keys = [0.0, 5.0, 10.0];
    let vals = [1.0, 0.8, 1.0];
    assert_eq!(interpolate(-1.0, &keys, &vals), 1.0);
    assert_eq!(interpolate(0.0, &keys, &vals), 1.0);
    assert!((interpolate(2.5, &keys, &vals) - 0.9).abs() < 1e-12);
    assert!((interpolate(5.0, &keys, &vals) - 0.8).abs() < 1e-12);
    assert!((interpolate(7.5, &keys, &vals) - 0.9).abs() < 1e-12);
    assert_eq!(interpolate(10.0, &keys, &vals), 1.0);
    assert_eq!(interpolate(50.0, &keys, &vals), 1.0);
}

#[test]
fn piecewise_degenerate_inputs() {
    assert_eq!(interpolate(3.0, &[], &[]), 0.0);
    assert_eq!(interpolate(3.0, &[1.0], &[7.0]), 7.0);
    assert_eq!(interpolate(3.0, &[1.0, 2.0], &[7.0]), 7.0);
}

#[test]
fn scalar_lerp_is_unclamped() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.5), 4.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 1.5), 8.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, -0.5), 0.0);
}
