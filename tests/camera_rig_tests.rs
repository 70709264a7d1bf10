// Host-side tests for camera targets and the damped camera rig.
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

use bodies::PlanetId;
use camera_rig::*;
use constants::*;
use focus::FocusState;
use glam::Vec3;

const FRAME: f32 = 1.0 / 60.0;

fn run(rig: &mut CameraRig, frames: usize) -> CameraPose {
    let mut pose = rig.pose();
    for i in 0..frames {
        pose = rig.update(FRAME, i as f32 * FRAME, CameraEffects::default());
    }
    pose
}

#[test]
fn viewport_splits_at_768_css_px() {
    assert_eq!(Viewport::from_width(767.0), Viewport::Mobile);
    assert_eq!(Viewport::from_width(768.0), Viewport::Desktop);
    assert_eq!(Viewport::from_width(1920.0), Viewport::Desktop);
}

#[test]
fn targets_per_focus_state() {
    let overview = target_for(
        FocusState::Overview,
        Viewport::Desktop,
        Vec3::new(0.0, 8.0, 20.0),
        Vec3::ZERO,
        0.0,
    );
    assert_eq!(overview.fov_deg, 60.0);
    assert_eq!(overview.look_at, Vec3::ZERO);

    let sun = target_for(FocusState::SunFocused, Viewport::Mobile, Vec3::ZERO, Vec3::ZERO, 0.0);
    assert_eq!(sun.eye, Vec3::new(0.0, 2.0, 8.0));
    assert_eq!(sun.fov_deg, 65.0);

    let p = Vec3::new(3.2, 2.0, 7.4);
    let planet = target_for(
        FocusState::PlanetFocused {
            planet: PlanetId(0),
            position: p,
        },
        Viewport::Desktop,
        Vec3::ZERO,
        Vec3::ZERO,
        10.0,
    );
    assert_eq!(planet.eye, p + Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(planet.look_at, p);
    assert_eq!(planet.fov_deg, 55.0);
}

#[test]
fn overview_drifts_around_the_controls_eye() {
    let eye = Vec3::new(0.0, 8.0, 20.0);
    let a = target_for(FocusState::Overview, Viewport::Desktop, eye, Vec3::ZERO, 0.0);
    let b = target_for(FocusState::Overview, Viewport::Desktop, eye, Vec3::ZERO, 5.0);
    assert_ne!(a.eye, b.eye);
    assert!(a.eye.distance(eye) <= DRIFT_RADIUS * 1.1);
    assert!(b.eye.distance(eye) <= DRIFT_RADIUS * 1.1);
}

#[test]
fn rig_starts_at_overview() {
    let rig = CameraRig::new(Viewport::Desktop);
    let pose = rig.pose();
    assert_eq!(pose.eye, OVERVIEW_EYE[0]);
    assert_eq!(pose.fov_deg, OVERVIEW_FOV_DEG[0]);
    assert!(rig.is_settled());
}

#[test]
fn rig_flies_to_new_target_and_settles() {
    let mut rig = CameraRig::new(Viewport::Desktop);
    let target = CameraTarget {
        eye: Vec3::new(6.2, 4.0, 10.4),
        look_at: Vec3::new(3.2, 2.0, 7.4),
        fov_deg: 55.0,
    };
    rig.retarget(target);
    assert!(!rig.is_settled());
    let pose = run(&mut rig, 600);
    assert!(rig.is_settled());
    assert!(pose.eye.distance(target.eye) < 0.01);
    assert!(pose.look_at.distance(target.look_at) < 0.01);
    assert!((pose.fov_deg - 55.0).abs() < 0.05);
}

#[test]
fn fov_uses_vector_retention() {
    let mut rig = CameraRig::new(Viewport::Desktop);
    let start = rig.pose().fov_deg;
    rig.retarget(CameraTarget {
        eye: rig.pose().eye,
        look_at: Vec3::ZERO,
        fov_deg: 50.0,
    });
    let mut expected = animator::DampedValue::new(start, CAMERA_FOV_DAMPING, CAMERA_MAX_VELOCITY)
        .with_retention(VECTOR_RETENTION);
    expected.set_target(50.0);
    for _ in 0..20 {
        expected.update(FRAME);
    }
    let pose = run(&mut rig, 20);
    let want = expected.value();
    assert!((pose.fov_deg - want).abs() < 1e-4, "{} vs {want}", pose.fov_deg);
}

#[test]
fn snap_skips_the_flight() {
    let mut rig = CameraRig::new(Viewport::Mobile);
    let target = CameraTarget {
        eye: Vec3::new(1.0, 1.0, 1.0),
        look_at: Vec3::ZERO,
        fov_deg: 40.0,
    };
    rig.snap(target);
    assert_eq!(rig.pose().eye, target.eye);
    assert_eq!(rig.update(FRAME, 0.0, CameraEffects::default()).eye, target.eye);
}

#[test]
fn effects_offset_the_pose_not_the_animators() {
    let mut rig = CameraRig::new(Viewport::Desktop);
    let shaken = rig.update(
        FRAME,
        0.3,
        CameraEffects {
            shake: true,
            breathe: false,
        },
    );
    assert_ne!(shaken.eye, rig.pose().eye);
    assert!(shaken.eye.distance(rig.pose().eye) < SUN_SHAKE_INTENSITY * 2.0);

    let breathing = rig.update(
        FRAME,
        0.7,
        CameraEffects {
            shake: false,
            breathe: true,
        },
    );
    let d = breathing.eye - rig.pose().eye;
    assert_eq!(d.x, 0.0);
    assert!(d.y.abs() <= PLANET_BREATH_INTENSITY + 1e-6);
}

#[test]
fn view_proj_centres_the_look_target() {
    let pose = CameraPose {
        eye: Vec3::new(0.0, 8.0, 20.0),
        look_at: Vec3::ZERO,
        fov_deg: 60.0,
    };
    let clip = pose.view_proj(16.0 / 9.0) * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
}
