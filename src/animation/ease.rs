use crate::animation::interp::{Extrapolate, clamped_lerp};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// The standard camera curve, `cubic-bezier(0.65, 0, 0.35, 1)`.
    #[default]
    InOut,
    /// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier {
        /// First control point x, clamped to `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, clamped to `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// Elastic overshoot: `1 - cos(t*pi/2)^3 * cos(t*bounciness*pi)`.
    ///
    /// Output exceeds 1 before settling.
    Elastic {
        /// Number of half-oscillations over the curve.
        #[serde(default = "default_bounciness")]
        bounciness: f64,
    },
}

fn default_bounciness() -> f64 {
    1.0
}

impl Ease {
    /// Apply this easing function to normalized progress `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOut => cubic_bezier(t, 0.65, 0.0, 0.35, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(t, x1, y1, x2, y2),
            Self::Elastic { bounciness } => {
                let b = if bounciness.is_finite() {
                    bounciness.max(0.0)
                } else {
                    default_bounciness()
                };
                let half_pi = std::f64::consts::FRAC_PI_2;
                1.0 - (t * half_pi).cos().powi(3) * (t * b * std::f64::consts::PI).cos()
            }
        }
    }
}

/// Map `frame` into `[0, 1]` over `window` (clamped) and shape it with `ease`.
pub fn eased_progress(frame: f64, window: [f64; 2], ease: Ease) -> f64 {
    let t = clamped_lerp(frame, window, [0.0, 1.0], Extrapolate::Clamp);
    ease.apply(t)
}

fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluate a unit cubic bezier at `x`: solve `bx(s) = x` then return `by(s)`.
///
/// Newton-Raphson first, bisection when the slope flattens or Newton fails to converge.
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    const EPS: f64 = 1e-7;
    let x1 = if x1.is_finite() { x1.clamp(0.0, 1.0) } else { 0.0 };
    let x2 = if x2.is_finite() { x2.clamp(0.0, 1.0) } else { 1.0 };
    let y1 = if y1.is_finite() { y1 } else { 0.0 };
    let y2 = if y2.is_finite() { y2 } else { 1.0 };

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - x;
        if err.abs() < EPS {
            return bezier_coord(s, y1, y2);
        }
        let d = bezier_slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // bx is monotonic in s for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..64 {
        let v = bezier_coord(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_coord(s, y1, y2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
