use super::constants::FRAME_RATE_NORMALIZER;

// Frame-rate independent blend helpers.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend factor that closes all but `base` of a gap per second.
/// `lerp(x, target, exp_lerp_factor(0.001, dt))` leaves 0.1% after one second.
#[inline]
pub fn exp_lerp_factor(base: f32, dt_sec: f32) -> f32 {
    1.0 - base.powf(dt_sec.max(0.0))
}

/// Converts a "lerp by `rate` every 60 Hz frame" constant into the factor for
/// a frame of `dt_sec` seconds.
#[inline]
pub fn frame_lerp_factor(rate_per_frame: f32, dt_sec: f32) -> f32 {
    let steps = dt_sec.max(0.0) * FRAME_RATE_NORMALIZER;
    1.0 - (1.0 - rate_per_frame.clamp(0.0, 1.0)).powf(steps)
}

/// Moves `current` toward `target` by a 60 Hz-tuned per-frame rate.
#[inline]
pub fn approach(current: f32, target: f32, rate_per_frame: f32, dt_sec: f32) -> f32 {
    lerp(current, target, frame_lerp_factor(rate_per_frame, dt_sec))
}

/// Linear ramp toward `target` at `per_sec` units per second, never passing it.
#[inline]
pub fn ramp(current: f32, target: f32, per_sec: f32, dt_sec: f32) -> f32 {
    let step = per_sec.abs() * dt_sec.max(0.0);
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
