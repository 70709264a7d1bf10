// Host-side tests for the scene model: focus round trips, orbits, picking
// targets and snapshot contents.
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
mod quality {
    include!("../src/core/quality.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use bodies::{Pickable, PlanetId, PLANETS};
use camera_rig::{target_for, Viewport};
use focus::{FocusState, OverlayView, SceneRequest};
use glam::Vec3;
use quality::{QualitySettings, QualityTier};
use scene::{Scene, SceneEffect};

const FRAME: f32 = 1.0 / 60.0;

fn desktop_scene() -> Scene {
    Scene::new(
        Viewport::Desktop,
        QualitySettings::for_tier(QualityTier::High),
    )
}

fn run(scene: &mut Scene, frames: usize) -> scene::SceneSnapshot {
    let mut snap = scene.step(FRAME);
    for _ in 1..frames {
        snap = scene.step(FRAME);
    }
    snap
}

#[test]
fn focus_round_trip_restores_overview_camera() {
    let mut scene = desktop_scene();
    run(&mut scene, 10);

    let a = PlanetId(0);
    let at = Vec3::new(3.2, 2.0, 7.4);
    assert!(scene.request(SceneRequest::FocusPlanet {
        planet: a,
        position: at
    }));
    let snap = run(&mut scene, 5);
    assert_eq!(
        scene.focus().state(),
        FocusState::PlanetFocused {
            planet: a,
            position: at
        }
    );
    assert!(!snap.free_camera);
    assert!(matches!(snap.overlay, Some(OverlayView::Planet { planet, .. }) if planet == a));
    assert_eq!(scene.rig().target().look_at, at);
    assert_eq!(scene.rig().target().eye, at + Vec3::new(3.0, 2.0, 3.0));

    assert!(scene.request(SceneRequest::Close));
    let snap = run(&mut scene, 1);
    assert_eq!(scene.focus().state(), FocusState::Overview);
    assert!(snap.overlay.is_none());
    assert!(snap.free_camera);

    let elapsed = scene.elapsed();
    let controls = scene.controls_mut();
    let expected = target_for(
        FocusState::Overview,
        Viewport::Desktop,
        controls.eye(),
        controls.target(),
        elapsed,
    );
    assert_eq!(scene.rig().target(), expected);
    assert_eq!(scene.rig().target().fov_deg, 60.0);
}

#[test]
fn clicking_planet_focuses_its_current_anchor() {
    let mut scene = desktop_scene();
    run(&mut scene, 30);
    let b = PlanetId(1);
    let anchor = scene.planet_anchor(b).unwrap();
    assert_eq!(scene.click(Pickable::Planet(b)), None);
    assert_eq!(
        scene.focus().state(),
        FocusState::PlanetFocused {
            planet: b,
            position: anchor
        }
    );

    // a second click later keeps the original capture
    run(&mut scene, 30);
    scene.click(Pickable::Planet(b));
    assert_eq!(
        scene.focus().state(),
        FocusState::PlanetFocused {
            planet: b,
            position: anchor
        }
    );
}

#[test]
fn focused_planet_stops_orbiting() {
    let mut scene = desktop_scene();
    run(&mut scene, 10);
    scene.click(Pickable::Planet(PlanetId(0)));
    let held = scene.planet_anchor(PlanetId(0));
    let other = scene.planet_anchor(PlanetId(2));
    run(&mut scene, 120);
    assert_eq!(scene.planet_anchor(PlanetId(0)), held);
    assert_ne!(scene.planet_anchor(PlanetId(2)), other);
}

#[test]
fn anchors_follow_the_orbit() {
    let mut scene = desktop_scene();
    run(&mut scene, 600);
    let t = scene.elapsed();
    for (i, cfg) in PLANETS.iter().enumerate() {
        let anchor = scene.planet_anchor(PlanetId(i)).unwrap();
        let orbit = cfg.orbital_position(t);
        // eased anchors trail the orbit by roughly speed / ln(1000)
        assert!(anchor.distance(orbit) < 0.5, "planet {i}: {anchor:?} vs {orbit:?}");
        assert!((anchor.y - cfg.y_offset).abs() < 1e-6);
    }
}

#[test]
fn sun_click_focuses_sun() {
    let mut scene = desktop_scene();
    assert_eq!(scene.click(Pickable::Sun), None);
    let snap = run(&mut scene, 1);
    assert!(scene.focus().is_sun_focused());
    assert!(matches!(snap.overlay, Some(OverlayView::Sun(_))));
    assert!(snap.transitioning);
}

#[test]
fn link_bodies_open_urls_without_changing_focus() {
    let mut scene = desktop_scene();
    assert_eq!(
        scene.click(Pickable::Satellite),
        Some(SceneEffect::OpenUrl(content::RESUME_URL))
    );
    assert_eq!(
        scene.click(Pickable::Station),
        Some(SceneEffect::OpenUrl(content::LINKEDIN_URL))
    );
    assert_eq!(
        scene.click(Pickable::Project(0)),
        Some(SceneEffect::OpenUrl(content::PROJECTS[0].url))
    );
    assert_eq!(scene.click(Pickable::Project(99)), None);
    assert_eq!(scene.focus().state(), FocusState::Overview);
}

#[test]
fn transition_flag_clears_once_camera_arrives() {
    let mut scene = desktop_scene();
    scene.click(Pickable::Sun);
    assert!(run(&mut scene, 1).transitioning);
    let snap = run(&mut scene, 900);
    assert!(!snap.transitioning);
    assert!(scene.focus().is_sun_focused());
}

#[test]
fn hovered_planet_grows_and_shows_label() {
    let mut scene = desktop_scene();
    let p = PlanetId(2);
    scene.set_hover(Some(Pickable::Planet(p)));
    let snap = run(&mut scene, 120);
    let spheres = scene.pick_spheres();
    let (_, _, r) = spheres
        .iter()
        .copied()
        .find(|(k, _, _)| *k == Pickable::Planet(p))
        .unwrap();
    assert!((r - PLANETS[2].size * 1.1).abs() < 0.01, "{r}");

    let label = snap.label.expect("hover label");
    assert_eq!(label.title, PLANETS[2].payload.title);
    assert_eq!(label.subtitle, Some(PLANETS[2].payload.role));
    assert!((label.opacity - 1.0).abs() < 1e-6);

    // label fades out rather than vanishing
    scene.set_hover(None);
    let snap = run(&mut scene, 6);
    let fading = snap.label.map(|l| l.opacity).unwrap_or(0.0);
    assert!(fading > 0.0 && fading < 1.0, "{fading}");
    let snap = run(&mut scene, 60);
    assert!(snap.label.is_none());
}

#[test]
fn link_body_labels() {
    let mut scene = desktop_scene();
    scene.set_hover(Some(Pickable::Satellite));
    let snap = run(&mut scene, 1);
    assert_eq!(snap.label.map(|l| l.title), Some("View Resume"));
    scene.set_hover(Some(Pickable::Project(1)));
    let snap = run(&mut scene, 1);
    assert_eq!(
        snap.label.map(|l| l.title),
        Some(content::PROJECTS[1].title)
    );
}

#[test]
fn pick_spheres_cover_every_pickable() {
    let scene = desktop_scene();
    let spheres = scene.pick_spheres();
    assert_eq!(spheres.len(), 1 + PLANETS.len() + content::PROJECTS.len() + 2);
    let (kind, center, radius) = spheres[0];
    assert_eq!(kind, Pickable::Sun);
    assert_eq!(center, Vec3::ZERO);
    assert_eq!(radius, 3.0);
}

#[test]
fn low_quality_drops_atmosphere_shells() {
    let mut high = desktop_scene();
    let mut low = Scene::new(Viewport::Desktop, QualitySettings::for_tier(QualityTier::Low));
    let high_glows = run(&mut high, 1).glows.len();
    let low_glows = run(&mut low, 1).glows.len();
    // sun corona plus one atmosphere per planet
    assert_eq!(high_glows - low_glows, 1 + PLANETS.len());
}

#[test]
fn snapshot_lists_bodies_and_shared_orbit_ring() {
    let mut scene = desktop_scene();
    let snap = run(&mut scene, 1);
    assert_eq!(snap.orbit_rings.as_slice(), &[8.0]);
    let textured = snap.bodies.iter().filter(|b| b.texture.is_some()).count();
    assert_eq!(textured, 1 + PLANETS.len());
    assert!(snap.bodies.iter().all(|b| b.radius > 0.0));
}

#[test]
fn free_camera_only_in_overview() {
    let mut scene = desktop_scene();
    scene.click(Pickable::Sun);
    run(&mut scene, 1);
    let before = scene.controls_mut().eye();
    scene.controls_mut().rotate(400.0, 0.0, 800.0);
    run(&mut scene, 60);
    assert_eq!(scene.controls_mut().eye(), before);
}

#[test]
fn viewport_change_retargets_camera() {
    let mut scene = desktop_scene();
    scene.click(Pickable::Sun);
    scene.set_viewport(Viewport::Mobile);
    run(&mut scene, 1);
    assert_eq!(scene.rig().target().fov_deg, 65.0);
}
