// Frame, input and render tuning constants for the web shell.
//
// Scene/camera tuning lives in `core::constants`; these cover what only the
// browser side needs (frame clamping, picking, post-processing).

// Longest frame step fed to the scene; a backgrounded tab resumes without a jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Backing store scale cap (CSS px * devicePixelRatio)
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Pointer travel (CSS px) below which a press-release counts as a click
pub const CLICK_MAX_TRAVEL_PX: f32 = 5.0;

// Hover label offset from the projected anchor (CSS px)
pub const HOVER_LABEL_OFFSET_PX: f32 = 12.0;

// Seeds for the background point clouds
pub const STAR_SEED: u64 = 0x0DDB_A11;
pub const SPARKLE_SEED: u64 = 0x5EA5_1DE;

// Mesh resolution
pub const SPHERE_SEGMENTS: u32 = 48;
pub const SPHERE_RINGS: u32 = 32;
pub const ORBIT_RING_SEGMENTS: u32 = 128;

// Lighting
pub const AMBIENT_LIGHT: f32 = 0.25;

// Orbit ring look
pub const ORBIT_RING_COLOR: [f32; 4] = [0.4, 0.55, 0.8, 0.25];

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 1.2;
pub const BLOOM_THRESHOLD: f32 = 0.85;

// Scene clear colour (deep space)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
