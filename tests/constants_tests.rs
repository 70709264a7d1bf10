// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_and_render_constants_are_within_reasonable_bounds() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(CLICK_MAX_TRAVEL_PX > 0.0);
    assert!(SPHERE_SEGMENTS >= 3 && SPHERE_RINGS >= 2);
    assert!(ORBIT_RING_SEGMENTS >= 3);
    assert!((0.0..=1.0).contains(&AMBIENT_LIGHT));
    assert!((0.0..=1.0).contains(&BLOOM_THRESHOLD));
    assert!(BLOOM_STRENGTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn retention_and_damping_are_fractions() {
    for r in [SCALAR_RETENTION, VECTOR_RETENTION] {
        assert!(r > 0.0 && r < 1.0);
    }
    for d in [
        SCALE_DAMPING,
        FLOAT_DAMPING,
        CAMERA_EYE_DAMPING,
        CAMERA_LOOK_DAMPING,
        CAMERA_FOV_DAMPING,
        CONTROLS_DAMPING,
        GLOW_LERP_PER_FRAME,
    ] {
        assert!(d > 0.0 && d < 1.0);
    }
    assert!(ORBIT_LERP_BASE > 0.0 && ORBIT_LERP_BASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_presets_have_logical_relationships() {
    for vi in 0..2 {
        // focused views sit closer than the overview
        assert!(SUN_EYE[vi].length() < OVERVIEW_EYE[vi].length());
        assert!(PLANET_EYE_OFFSET[vi].length() < OVERVIEW_EYE[vi].length());
        // mobile uses wider lenses
        assert!(OVERVIEW_FOV_DEG[1] > OVERVIEW_FOV_DEG[0]);
        assert!(SUN_FOV_DEG[1] > SUN_FOV_DEG[0]);
        assert!(PLANET_FOV_DEG[1] > PLANET_FOV_DEG[0]);
        let (min, max) = CONTROLS_DISTANCE[vi];
        assert!(min < max);
        let overview = OVERVIEW_EYE[vi].length();
        assert!(overview >= min && overview <= max);
    }
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_scales_grow_bodies() {
    assert!(SUN_FOCUS_SCALE > SUN_HOVER_SCALE && SUN_HOVER_SCALE > 1.0);
    assert!(PLANET_FOCUS_SCALE > PLANET_HOVER_SCALE && PLANET_HOVER_SCALE > 1.0);
    assert!(SATELLITE_HOVER_SCALE > 1.0 && STATION_HOVER_SCALE > 1.0);
    assert!(PROJECT_STAR_PICK_RADIUS > PROJECT_STAR_RADIUS);
    assert!(LABEL_FADE_IN_PER_SEC > LABEL_FADE_OUT_PER_SEC);
}
