/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (not clamped; callers decide).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// What [`clamped_lerp`] does with inputs outside the frame window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Clamp on both sides.
    #[default]
    Clamp,
    /// Clamp before the window, extend the line after it.
    ClampLeft,
    /// Extend the line before the window, clamp after it.
    ClampRight,
    /// Unclamped line through both keys.
    Extend,
}

/// Linear map of `x` from `[x0, x1]` onto `[v0, v1]`.
///
/// A degenerate window (`x0 == x1`) behaves like a step at `x1`.
pub fn clamped_lerp(x: f64, window: [f64; 2], values: [f64; 2], extrapolate: Extrapolate) -> f64 {
    let [x0, x1] = window;
    let [v0, v1] = values;
    if x1 == x0 {
        return if x >= x1 { v1 } else { v0 };
    }

    let (clamp_lo, clamp_hi) = match extrapolate {
        Extrapolate::Clamp => (true, true),
        Extrapolate::ClampLeft => (true, false),
        Extrapolate::ClampRight => (false, true),
        Extrapolate::Extend => (false, false),
    };

    // Windows may run backwards; "before" means on the x0 side.
    let t = (x - x0) / (x1 - x0);
    if clamp_lo && t < 0.0 {
        return v0;
    }
    if clamp_hi && t > 1.0 {
        return v1;
    }
    <f64 as Lerp>::lerp(&v0, &v1, t)
}

/// Piecewise-linear interpolation over ascending `inputs`, clamped at both ends.
///
/// Returns `outputs[0]` when fewer than two keys are given or the slices disagree in length.
pub fn interpolate(x: f64, inputs: &[f64], outputs: &[f64]) -> f64 {
    let n = inputs.len().min(outputs.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || inputs.len() != outputs.len() {
        return outputs[0];
    }

    let idx = inputs[..n].partition_point(|&k| k <= x);
    if idx == 0 {
        return outputs[0];
    }
    if idx >= n {
        return outputs[n - 1];
    }
    clamped_lerp(
        x,
        [inputs[idx - 1], inputs[idx]],
        [outputs[idx - 1], outputs[idx]],
        Extrapolate::Clamp,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
