use crate::foundation::core::Fps;
use crate::foundation::math::finite_or;

/// Physical parameters of a damped harmonic oscillator released at rest.
///
/// Non-finite or non-positive `stiffness`/`mass` and negative `damping` fall back to the defaults
/// at evaluation time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Never travel past `to`.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Onset ramp used by magnetic displacement.
    pub const MAGNET_ONSET: Self = Self {
        stiffness: 60.0,
        damping: 15.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    fn sanitized(self) -> Self {
        let d = Self::default();
        let positive = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };
        Self {
            stiffness: positive(self.stiffness, d.stiffness),
            mass: positive(self.mass, d.mass),
            damping: if self.damping.is_finite() && self.damping >= 0.0 {
                self.damping
            } else {
                d.damping
            },
            overshoot_clamping: self.overshoot_clamping,
        }
    }

    /// `zeta = c / (2 * sqrt(k * m))`; `< 1` oscillates, `>= 1` does not.
    pub fn damping_ratio(self) -> f64 {
        let s = self.sanitized();
        s.damping / (2.0 * (s.stiffness * s.mass).sqrt())
    }
}

/// Closed-form oscillator in "displacement from rest" space.
#[derive(Clone, Copy, Debug)]
struct Oscillator {
    omega0: f64,
    zeta: f64,
}

impl Oscillator {
    fn new(cfg: SpringConfig) -> Self {
        let cfg = cfg.sanitized();
        let omega0 = (cfg.stiffness / cfg.mass).sqrt();
        Self {
            omega0,
            zeta: cfg.damping / (2.0 * (cfg.stiffness * cfg.mass).sqrt()),
        }
    }

    /// Displacement at `t` seconds for unit initial displacement and zero initial velocity.
    fn unit_displacement(self, t: f64) -> f64 {
        let Self { omega0, zeta } = self;
        if (zeta - 1.0).abs() < 1e-9 {
            (-omega0 * t).exp() * (1.0 + omega0 * t)
        } else if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega0 * t).exp();
            decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            let c1 = r2 / (r2 - r1);
            let c2 = -r1 / (r2 - r1);
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        }
    }

    /// Upper bound on `|unit_displacement(u)|` for all `u >= t`.
    fn envelope(self, t: f64) -> f64 {
        let Self { omega0, zeta } = self;
        if zeta < 1.0 && (zeta - 1.0).abs() >= 1e-9 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let amp = (1.0 + (zeta * omega0 / omega_d).powi(2)).sqrt();
            amp * (-zeta * omega0 * t).exp()
        } else {
            // Non-oscillating responses decay monotonically from 1.
            self.unit_displacement(t).abs()
        }
    }
}

/// Position of a spring released at rest from `from` toward `to`, `elapsed_frames` after release.
///
/// Pure function of its inputs: any frame can be sampled without replaying earlier ones.
/// Negative elapsed time returns `from`.
pub fn spring(elapsed_frames: f64, fps: Fps, config: SpringConfig, from: f64, to: f64) -> f64 {
    if elapsed_frames.is_nan() || elapsed_frames <= 0.0 {
        return from;
    }
    let t = fps.frames_to_secs(elapsed_frames);
    let x = Oscillator::new(config).unit_displacement(t);
    let value = to + (from - to) * finite_or(x, 0.0);

    if config.overshoot_clamping {
        let passed = if to >= from { value > to } else { value < to };
        if passed {
            return to;
        }
    }
    value
}

/// Frames until the spring stays within `threshold` (as a fraction of the travel) of its target.
///
/// Capped at ten minutes of frames for pathological configurations.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> u64 {
    let threshold = if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        0.005
    };
    let osc = Oscillator::new(config);
    let cap = fps.secs_to_frames_round(600.0);
    let mut settled_from = 0u64;
    for f in 0..=cap {
        let t = fps.frames_to_secs(f as f64);
        let x = osc.unit_displacement(t);
        if config.overshoot_clamping && x < 0.0 {
            return f;
        }
        if x.abs() >= threshold {
            settled_from = f + 1;
        }
        if osc.envelope(t) < threshold {
            return settled_from;
        }
    }
    cap
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
