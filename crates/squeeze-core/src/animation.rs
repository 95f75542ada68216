//! Animation primitives: easing curves, duration-bounded springs, and the
//! [`Motion`] capability the host's animation system is consumed through.
//!
//! A host with its own animation engine implements [`MotionFactory`] and
//! hands out [`Motion`]s that report the engine's live interpolated value.
//! [`BuiltinMotions`] is the fallback: plain time-based interpolation driven
//! by the `dt` passed to [`Motion::advance`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope decay, as `ln(1/residual)`, a spring reaches at the end of its
/// duration. `ln(1000)`: 0.1% of the initial displacement remains.
const SPRING_SETTLE_LN: f64 = 6.907_755_278_982_137;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in and out
    CubicInOut,
    /// Back ease out (overshoots then returns)
    BackOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
            Self::BackOut => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                C1.mul_add((t - 1.0).powi(2), C3.mul_add((t - 1.0).powi(3), 1.0))
            }
        }
    }
}

// =============================================================================
// EasedValue - timed eased move
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }
}

// =============================================================================
// DampedSpring - duration-bounded spring curve
// =============================================================================

/// A spring move that settles within a fixed duration.
///
/// The damped harmonic oscillator's natural frequency is derived from the
/// duration and damping ratio so the oscillation envelope has decayed to
/// 0.1% when the duration elapses; the value then snaps to `to`. Ratios
/// below 1.0 overshoot and oscillate, 1.0 and above approach monotonically.
#[derive(Debug, Clone)]
pub struct DampedSpring {
    /// Start value
    pub from: f64,
    /// Resting value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Damping ratio (zeta)
    pub damping_ratio: f64,
    /// Elapsed time
    pub elapsed: f64,
}

impl DampedSpring {
    /// Create a spring from `from` to `to`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, damping_ratio: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            damping_ratio: damping_ratio.clamp(0.01, 1.0),
            elapsed: 0.0,
        }
    }

    /// Whether the curve overshoots its resting value.
    #[must_use]
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio < 1.0
    }

    /// Normalized displacement remaining at time `t` (1.0 at start, 0.0 at rest).
    #[must_use]
    pub fn displacement(&self, t: f64) -> f64 {
        if self.duration <= 0.0 || t >= self.duration {
            return 0.0;
        }
        let t = t.max(0.0);
        let zeta = self.damping_ratio;
        let omega = SPRING_SETTLE_LN / (zeta * self.duration);
        let envelope = (-zeta * omega * t).exp();

        if zeta < 1.0 {
            let omega_d = omega * zeta.mul_add(-zeta, 1.0).sqrt();
            let (sin, cos) = (omega_d * t).sin_cos();
            envelope * (zeta * omega / omega_d).mul_add(sin, cos)
        } else {
            envelope * omega.mul_add(t, 1.0)
        }
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.from - self.to).mul_add(self.displacement(self.elapsed), self.to)
    }

    /// Whether the spring has settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance time.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }
}

// =============================================================================
// Motion - the live-position capability
// =============================================================================

/// A running one-dimensional animation whose live value can be sampled.
pub trait Motion: fmt::Debug + Send + Sync {
    /// Advance by `dt` seconds of frame time.
    fn advance(&mut self, dt: f64);

    /// Current interpolated value, or `None` when it cannot be observed
    /// (for example the host surface is not attached yet).
    fn sample(&self) -> Option<f64>;

    /// Value the motion settles on.
    fn target(&self) -> f64;

    /// Whether the motion has finished.
    fn is_settled(&self) -> bool;
}

impl Motion for EasedValue {
    fn advance(&mut self, dt: f64) {
        self.update(dt);
    }

    fn sample(&self) -> Option<f64> {
        Some(self.value())
    }

    fn target(&self) -> f64 {
        self.to
    }

    fn is_settled(&self) -> bool {
        self.is_complete()
    }
}

impl Motion for DampedSpring {
    fn advance(&mut self, dt: f64) {
        self.update(dt);
    }

    fn sample(&self) -> Option<f64> {
        Some(self.value())
    }

    fn target(&self) -> f64 {
        self.to
    }

    fn is_settled(&self) -> bool {
        self.is_complete()
    }
}

/// Creates the motions a control runs.
pub trait MotionFactory: fmt::Debug + Send + Sync {
    /// Timed move with an easing curve.
    fn eased(&self, from: f64, to: f64, duration: f64, easing: Easing) -> Box<dyn Motion>;

    /// Spring move with the given damping ratio, bounded by `duration`.
    fn spring(&self, from: f64, to: f64, duration: f64, damping_ratio: f64) -> Box<dyn Motion>;
}

/// Time-based interpolation used when the host supplies no animation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMotions;

impl MotionFactory for BuiltinMotions {
    fn eased(&self, from: f64, to: f64, duration: f64, easing: Easing) -> Box<dyn Motion> {
        Box::new(EasedValue::new(from, to, duration).with_easing(easing))
    }

    fn spring(&self, from: f64, to: f64, duration: f64, damping_ratio: f64) -> Box<dyn Motion> {
        Box::new(DampedSpring::new(from, to, duration, damping_ratio))
    }
}
