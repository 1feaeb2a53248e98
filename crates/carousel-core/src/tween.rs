//! Minimal property tweening: a value interpolates from where it currently is
//! towards a target over a fixed duration. Re-targeting overwrites the
//! in-flight tween and starts from the current interpolated value.

use glam::Vec3;
use std::time::Duration;

use crate::gradient::GradientStops;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic in-out ("power1" in-out).
    #[default]
    PowerInOut,
    CubicInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

impl Lerp for GradientStops {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        GradientStops {
            primary: f32::lerp(a.primary, b.primary, t),
            left: f32::lerp(a.left, b.left, t),
            centre: f32::lerp(a.centre, b.centre, t),
            right: f32::lerp(a.right, b.right, t),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_sec: f32,
    elapsed_sec: f32,
    easing: Easing,
}

impl<T: Lerp + PartialEq> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_sec: duration.as_secs_f32(),
            elapsed_sec: 0.0,
            easing,
        }
    }

    /// A tween already at rest on `value`.
    pub fn settled(value: T, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration_sec: 0.0,
            elapsed_sec: 0.0,
            easing,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration_sec <= 0.0 {
            1.0
        } else {
            (self.elapsed_sec / self.duration_sec).min(1.0)
        }
    }

    pub fn value(&self) -> T {
        let p = self.progress();
        if p >= 1.0 {
            return self.to;
        }
        T::lerp(self.from, self.to, self.easing.apply(p))
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> T {
        if !self.is_finished() {
            self.elapsed_sec += dt_sec.max(0.0);
        }
        self.value()
    }

    /// Overwrite the in-flight animation: continue from the current value to `to`.
    pub fn retarget(&mut self, to: T, duration: Duration) {
        if to == self.to && self.is_finished() {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.duration_sec = duration.as_secs_f32();
        self.elapsed_sec = 0.0;
    }

    /// Jump straight to `value`, cancelling any animation.
    pub fn snap(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.duration_sec = 0.0;
        self.elapsed_sec = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        for e in [Easing::Linear, Easing::PowerInOut, Easing::CubicInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn in_out_is_symmetric() {
        let e = Easing::PowerInOut;
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn settled_tween_is_finished() {
        let t = Tween::settled(3.0_f32, Easing::Linear);
        assert!(t.is_finished());
        assert_eq!(t.value(), 3.0);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut t = Tween::new(0.0_f32, 1.0, Duration::from_millis(500), Easing::Linear);
        t.step(0.25);
        t.step(-1.0);
        assert!((t.value() - 0.5).abs() < 1e-6);
    }
}
