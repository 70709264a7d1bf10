// Host-side tests for the orbit controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod bodies {
    include!("../src/core/bodies.rs");
}
mod focus {
    include!("../src/core/focus.rs");
}
mod animator {
    include!("../src/core/animator.rs");
}
mod camera_rig {
    include!("../src/core/camera_rig.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod controls {
    include!("../src/core/controls.rs");
}

use camera_rig::Viewport;
use controls::OrbitControls;
use glam::Vec3;

const FRAME: f32 = 1.0 / 60.0;

fn drain(c: &mut OrbitControls, frames: usize) {
    for _ in 0..frames {
        c.update(FRAME);
    }
}

#[test]
fn starts_at_overview_eye() {
    let c = OrbitControls::new(Viewport::Desktop);
    assert!(c.eye().distance(Vec3::new(0.0, 8.0, 20.0)) < 1e-3);
    assert_eq!(c.target(), Vec3::ZERO);
}

#[test]
fn rotate_keeps_distance() {
    let mut c = OrbitControls::new(Viewport::Desktop);
    let d0 = c.distance();
    c.rotate(200.0, 50.0, 800.0);
    drain(&mut c, 300);
    assert!((c.eye().distance(c.target()) - d0).abs() < 1e-3);
    assert!(c.eye().distance(Vec3::new(0.0, 8.0, 20.0)) > 1.0);
}

#[test]
fn zoom_is_clamped_per_viewport() {
    let mut c = OrbitControls::new(Viewport::Desktop);
    for _ in 0..200 {
        c.zoom(-100.0);
        c.update(FRAME);
    }
    drain(&mut c, 300);
    assert!((c.distance() - 8.0).abs() < 1e-3, "{}", c.distance());
    for _ in 0..400 {
        c.zoom(100.0);
        c.update(FRAME);
    }
    drain(&mut c, 300);
    assert!((c.distance() - 30.0).abs() < 1e-3, "{}", c.distance());

    c.set_viewport(Viewport::Mobile);
    assert!(c.distance() <= 40.0 && c.distance() >= 12.0);
}

#[test]
fn pan_moves_the_target() {
    let mut c = OrbitControls::new(Viewport::Desktop);
    c.pan(100.0, 0.0, 800.0, 60.0);
    drain(&mut c, 300);
    assert!(c.target().length() > 0.1);
    // horizontal drag pans in the XZ plane only when looking level-ish
    assert!(c.target().y.abs() < c.target().length());
}

#[test]
fn disabled_controls_ignore_and_drop_input() {
    let mut c = OrbitControls::new(Viewport::Desktop);
    let eye = c.eye();
    c.rotate(300.0, 0.0, 800.0);
    c.set_enabled(false);
    c.zoom(-100.0);
    c.pan(50.0, 50.0, 800.0, 60.0);
    drain(&mut c, 120);
    assert!(c.eye().distance(eye) < 1e-4);
    assert!(!c.enabled());
}

#[test]
fn damping_spreads_input_over_frames() {
    let mut c = OrbitControls::new(Viewport::Desktop);
    let start = c.eye();
    c.rotate(400.0, 0.0, 800.0);
    c.update(FRAME);
    let after_one = c.eye().distance(start);
    drain(&mut c, 300);
    let after_all = c.eye().distance(start);
    assert!(after_one > 0.0);
    assert!(after_one < after_all * 0.2);
}
