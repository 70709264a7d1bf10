use glam::Vec3;

// Scene, camera and animation tuning shared by the pure scene model.

// Animator stepping: gains below are tuned per 60 Hz frame.
pub const FRAME_RATE_NORMALIZER: f32 = 60.0;
pub const SCALAR_RETENTION: f32 = 0.9; // velocity kept per step (scale/fov)
pub const VECTOR_RETENTION: f32 = 0.85; // velocity kept per step (positions)
// Whole steps simulated per update; a longer frame drops the excess time.
pub const MAX_ANIMATOR_STEPS: u32 = 600;

// Animator presets (damping factor, max velocity per step)
pub const SCALE_DAMPING: f32 = 0.15;
pub const SCALE_MAX_VELOCITY: f32 = 10.0;
pub const FLOAT_DAMPING: f32 = 0.12;
pub const FLOAT_MAX_VELOCITY: f32 = 10.0;
pub const CAMERA_EYE_DAMPING: f32 = 0.08;
pub const CAMERA_LOOK_DAMPING: f32 = 0.1;
pub const CAMERA_FOV_DAMPING: f32 = 0.05;
pub const CAMERA_MAX_VELOCITY: f32 = 50.0;

// Viewport
pub const MOBILE_WIDTH_PX: f64 = 768.0;

// Camera placement per focus state (desktop, mobile)
pub const OVERVIEW_EYE: [Vec3; 2] = [Vec3::new(0.0, 8.0, 20.0), Vec3::new(0.0, 5.0, 25.0)];
pub const OVERVIEW_FOV_DEG: [f32; 2] = [60.0, 75.0];
pub const SUN_EYE: [Vec3; 2] = [Vec3::new(0.0, 3.0, 6.0), Vec3::new(0.0, 2.0, 8.0)];
pub const SUN_FOV_DEG: [f32; 2] = [50.0, 65.0];
pub const PLANET_EYE_OFFSET: [Vec3; 2] = [Vec3::new(3.0, 2.0, 3.0), Vec3::new(4.0, 3.0, 4.0)];
pub const PLANET_FOV_DEG: [f32; 2] = [55.0, 70.0];
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Overview drift (gentle orbit while idle)
pub const DRIFT_RADIUS: f32 = 2.0;
pub const DRIFT_SPEED: f32 = 0.1;

// Cosmetic camera offsets
pub const SUN_SHAKE_INTENSITY: f32 = 0.02;
pub const PLANET_BREATH_INTENSITY: f32 = 0.1;
pub const SETTLE_DISTANCE: f32 = 0.5;

// Orbit controls
pub const CONTROLS_DAMPING: f32 = 0.05;
pub const CONTROLS_ROTATE_SPEED: f32 = 0.3;
pub const CONTROLS_ZOOM_SPEED: f32 = 0.6;
pub const CONTROLS_PAN_SPEED: f32 = 0.6;
pub const CONTROLS_DISTANCE: [(f32, f32); 2] = [(8.0, 30.0), (12.0, 40.0)];

// Orbit easing: anchors close this share of the gap per second is 1 - base^dt
pub const ORBIT_LERP_BASE: f32 = 0.001;

// Sun
pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_HOVER_SCALE: f32 = 1.1;
pub const SUN_FOCUS_SCALE: f32 = 1.3;
pub const SUN_FLOAT_AMPLITUDE: f32 = 0.1;
pub const SUN_SPIN_PER_SEC: f32 = 0.2;
pub const SUN_FLARE_COUNT: usize = 12;
pub const SUN_FLARE_DISTANCE: f32 = 4.0;
pub const SUN_FLARE_SIZE: f32 = 0.15;

// Planets
pub const PLANET_HOVER_SCALE: f32 = 1.1;
pub const PLANET_FOCUS_SCALE: f32 = 1.2;
pub const PLANET_FOCUS_FLOAT: f32 = 0.15;
pub const PLANET_HOVER_FLOAT: f32 = 0.08;
pub const PLANET_SPIN_PER_SEC: f32 = 0.3;
pub const LABEL_FADE_IN_PER_SEC: f32 = 3.0;
pub const LABEL_FADE_OUT_PER_SEC: f32 = 2.0;

// Satellite and station
pub const SATELLITE_ORBIT_RADIUS: f32 = 15.0;
pub const SATELLITE_ORBIT_SPEED: f32 = 0.12;
pub const SATELLITE_HEIGHT: f32 = 1.2;
pub const SATELLITE_SIZE: f32 = 0.7;
pub const SATELLITE_HOVER_SCALE: f32 = 1.25;
pub const STATION_POSITION: Vec3 = Vec3::new(60.0, -5.0, -30.0);
pub const STATION_PICK_RADIUS: f32 = 4.0;
pub const STATION_SIZE: f32 = 2.0;
pub const STATION_HOVER_SCALE: f32 = 1.13;

// Project stars
pub const PROJECT_STAR_RADIUS: f32 = 0.3;
pub const PROJECT_STAR_PICK_RADIUS: f32 = 0.5;
pub const PROJECT_STAR_SPIN_PER_SEC: f32 = 0.3;

// Frame-rate independent per-frame lerp rate used for opacities and glows
pub const GLOW_LERP_PER_FRAME: f32 = 0.1;
