use super::constants::{
    FRAME_RATE_NORMALIZER, MAX_ANIMATOR_STEPS, SCALAR_RETENTION, VECTOR_RETENTION,
};
use glam::Vec3;
use std::ops::{Add, Mul, Sub};

/// Quantity a [`Damped`] animator can drive: scalars and 3-vectors.
pub trait Dampable: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {
    const ZERO: Self;
    /// Default per-step velocity retention for this kind of quantity.
    const RETENTION: f32;

    fn magnitude(self) -> f32;

    /// Scale `self` down so its magnitude does not exceed `max`.
    fn clamp_magnitude(self, max: f32) -> Self;
}

impl Dampable for f32 {
    const ZERO: Self = 0.0;
    const RETENTION: f32 = SCALAR_RETENTION;

    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }

    #[inline]
    fn clamp_magnitude(self, max: f32) -> Self {
        self.clamp(-max, max)
    }
}

impl Dampable for Vec3 {
    const ZERO: Self = Vec3::ZERO;
    const RETENTION: f32 = VECTOR_RETENTION;

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn clamp_magnitude(self, max: f32) -> Self {
        self.clamp_length_max(max)
    }
}

/// Spring-like smoother that eases `current` toward `target` with a bounded
/// velocity.
///
/// Gains are expressed per 60 Hz step. A frame of `dt` seconds covers
/// `dt * 60` steps: each whole step runs the recurrence below with `s = 1`,
/// and the fractional remainder runs it once more with `s < 1`. Long frames
/// therefore stay as stable as a run of 60 Hz frames.
///
/// ```text
/// velocity += (target - current) * damping * s
/// velocity *= retention ^ s
/// velocity  = clamp(|velocity| <= max_velocity)
/// current  += velocity * s
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Damped<T: Dampable> {
    current: T,
    target: T,
    velocity: T,
    damping_factor: f32,
    max_velocity: f32,
    retention: f32,
}

pub type DampedValue = Damped<f32>;
pub type DampedVector3 = Damped<Vec3>;

impl<T: Dampable> Damped<T> {
    pub fn new(initial: T, damping_factor: f32, max_velocity: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: T::ZERO,
            damping_factor,
            max_velocity: max_velocity.abs(),
            retention: T::RETENTION,
        }
    }

    pub fn with_retention(mut self, retention: f32) -> Self {
        self.retention = retention.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Hard reset without animation.
    pub fn set_value(&mut self, value: T) {
        self.current = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    /// Advance one frame of `dt_sec` seconds and return the new value.
    pub fn update(&mut self, dt_sec: f32) -> T {
        let steps = dt_sec.max(0.0) * FRAME_RATE_NORMALIZER;
        if !steps.is_finite() {
            return self.current;
        }
        let whole = steps.floor();
        for _ in 0..(whole as u32).min(MAX_ANIMATOR_STEPS) {
            self.step(1.0);
        }
        let remainder = steps - whole;
        if remainder > 0.0 {
            self.step(remainder);
        }
        self.current
    }

    fn step(&mut self, s: f32) {
        let error = self.target - self.current;
        self.velocity = self.velocity + error * (self.damping_factor * s);
        self.velocity = self.velocity * self.retention.powf(s);
        self.velocity = self.velocity.clamp_magnitude(self.max_velocity);
        self.current = self.current + self.velocity * s;
    }

    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    #[inline]
    pub fn max_velocity(&self) -> f32 {
        self.max_velocity
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.target - self.current).magnitude()
    }
}
