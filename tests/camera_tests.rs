// Host-side tests for screen/world conversions used by picking and labels.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::{Mat4, Vec3};

const W: f32 = 1600.0;
const H: f32 = 900.0;

fn view_proj(eye: Vec3) -> Mat4 {
    let proj = Mat4::perspective_rh(60f32.to_radians(), W / H, 0.1, 1000.0);
    proj * Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
}

#[test]
fn world_to_screen_and_back() {
    let eye = Vec3::new(0.0, 8.0, 20.0);
    let vp = view_proj(eye);
    for world in [
        Vec3::ZERO,
        Vec3::new(3.2, 2.0, 7.4),
        Vec3::new(-6.0, 4.0, -6.0),
    ] {
        let px = world_to_screen(vp, W, H, world).expect("in front of camera");
        let (ro, rd) = screen_to_world_ray(vp, eye, W, H, px.x, px.y);
        // the ray through the projected pixel passes through the point
        let to_point = world - ro;
        let along = to_point.dot(rd);
        let miss = (to_point - rd * along).length();
        assert!(along > 0.0);
        assert!(miss < 1e-2, "{world:?} missed by {miss}");
    }
}

#[test]
fn look_target_projects_to_centre() {
    let vp = view_proj(Vec3::new(0.0, 8.0, 20.0));
    let px = world_to_screen(vp, W, H, Vec3::ZERO).expect("visible");
    assert!((px.x - W * 0.5).abs() < 0.5);
    assert!((px.y - H * 0.5).abs() < 0.5);
}

#[test]
fn points_behind_camera_do_not_project() {
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let vp = view_proj(eye);
    assert!(world_to_screen(vp, W, H, Vec3::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn centre_ray_points_at_target() {
    let eye = Vec3::new(0.0, 8.0, 20.0);
    let (ro, rd) = screen_to_world_ray(view_proj(eye), eye, W, H, W * 0.5, H * 0.5);
    assert_eq!(ro, eye);
    assert!((rd.length() - 1.0).abs() < 1e-5);
    assert!(rd.dot((-eye).normalize()) > 0.9999);
}

#[test]
fn screen_y_grows_downward() {
    let vp = view_proj(Vec3::new(0.0, 0.0, 20.0));
    let up = world_to_screen(vp, W, H, Vec3::new(0.0, 2.0, 0.0)).expect("visible");
    let down = world_to_screen(vp, W, H, Vec3::new(0.0, -2.0, 0.0)).expect("visible");
    assert!(up.y < down.y);
}
