use super::camera_rig::Viewport;
use super::constants::{
    CONTROLS_DAMPING, CONTROLS_DISTANCE, CONTROLS_PAN_SPEED, CONTROLS_ROTATE_SPEED,
    CONTROLS_ZOOM_SPEED,
};
use super::easing::frame_lerp_factor;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 0.01;
const WHEEL_ZOOM_BASE: f32 = 0.95;

/// Damped orbit/zoom/pan camera around a pan target, in the style of the
/// usual three-style orbit controls. Angles follow the y-up convention:
/// `azimuth` around +Y from +Z, `polar` down from +Y.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    // input not yet applied; drained by `update` with damping
    pending_azimuth: f32,
    pending_polar: f32,
    pending_log_zoom: f32,
    pending_pan: Vec3,
    enabled: bool,
}

impl OrbitControls {
    pub fn new(viewport: Viewport) -> Self {
        let offset = viewport.overview_eye();
        let (min_distance, max_distance) = CONTROLS_DISTANCE[viewport.index()];
        let distance = offset.length().max(1e-3);
        Self {
            target: Vec3::ZERO,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance: distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_log_zoom: 0.0,
            pending_pan: Vec3::ZERO,
            enabled: true,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any input still in flight.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
            self.pending_log_zoom = 0.0;
            self.pending_pan = Vec3::ZERO;
        }
        self.enabled = enabled;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        let (min_distance, max_distance) = CONTROLS_DISTANCE[viewport.index()];
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self.distance = self.distance.clamp(min_distance, max_distance);
    }

    /// Drag by `dx`/`dy` pixels on a surface `height_px` tall.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, height_px: f32) {
        if !self.enabled {
            return;
        }
        let h = height_px.max(1.0);
        self.pending_azimuth -= TAU * dx_px / h * CONTROLS_ROTATE_SPEED;
        self.pending_polar -= TAU * dy_px / h * CONTROLS_ROTATE_SPEED;
    }

    /// Wheel notch; negative `delta_y` zooms in.
    pub fn zoom(&mut self, delta_y: f32) {
        if !self.enabled || delta_y == 0.0 {
            return;
        }
        let step = -WHEEL_ZOOM_BASE.powf(CONTROLS_ZOOM_SPEED).ln();
        self.pending_log_zoom += if delta_y > 0.0 { step } else { -step };
    }

    /// Shift-drag by `dx`/`dy` pixels; moves the look target in view space.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, height_px: f32, fov_deg: f32) {
        if !self.enabled {
            return;
        }
        let h = height_px.max(1.0);
        let world_per_px = 2.0 * self.distance * (fov_deg.to_radians() * 0.5).tan() / h;
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        self.pending_pan +=
            (-right * dx_px + up * dy_px) * world_per_px * CONTROLS_PAN_SPEED;
    }

    /// Drain pending input with time-normalized damping.
    pub fn update(&mut self, dt_sec: f32) {
        let f = frame_lerp_factor(CONTROLS_DAMPING, dt_sec);
        self.azimuth = (self.azimuth + self.pending_azimuth * f) % TAU;
        self.polar = (self.polar + self.pending_polar * f).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.distance = (self.distance * (self.pending_log_zoom * f).exp())
            .clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan * f;

        let keep = 1.0 - f;
        self.pending_azimuth *= keep;
        self.pending_polar *= keep;
        self.pending_log_zoom *= keep;
        self.pending_pan *= keep;
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + Vec3::new(
                self.distance * s * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * s * self.azimuth.cos(),
            )
    }
}
