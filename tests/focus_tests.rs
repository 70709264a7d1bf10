// Host-side tests for the focus state machine.
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

use bodies::PlanetId;
use focus::*;
use glam::Vec3;

const A: PlanetId = PlanetId(0);
const B: PlanetId = PlanetId(1);

#[test]
fn starts_in_overview_without_overlay() {
    let f = FocusCoordinator::new();
    assert_eq!(f.state(), FocusState::Overview);
    assert!(f.overlay().is_none());
    assert!(f.free_camera_enabled());
    assert!(!f.is_transitioning());
}

#[test]
fn focusing_a_planet_captures_its_position() {
    let mut f = FocusCoordinator::new();
    let at = Vec3::new(3.2, 2.0, 7.4);
    assert!(f.focus_planet(A, at));
    assert_eq!(
        f.state(),
        FocusState::PlanetFocused {
            planet: A,
            position: at
        }
    );
    assert!(f.is_transitioning());
    assert!(!f.free_camera_enabled());
    match f.overlay() {
        Some(OverlayView::Planet { planet, payload, .. }) => {
            assert_eq!(planet, A);
            assert_eq!(payload.title, content::LAB.title);
        }
        other => panic!("unexpected overlay {other:?}"),
    }
}

#[test]
fn clicking_focused_planet_again_is_idempotent() {
    let mut f = FocusCoordinator::new();
    let first = Vec3::new(3.2, 2.0, 7.4);
    f.focus_planet(A, first);
    f.mark_settled();

    // planet has moved on its orbit since; the capture must not change
    assert!(!f.focus_planet(A, Vec3::new(-1.0, 0.0, 8.0)));
    assert_eq!(
        f.state(),
        FocusState::PlanetFocused {
            planet: A,
            position: first
        }
    );
    assert!(!f.is_transitioning());
}

#[test]
fn close_from_any_state_returns_to_overview() {
    let starts: [fn(&mut FocusCoordinator); 3] = [
        |_| {},
        |f| {
            f.focus_sun();
        },
        |f| {
            f.focus_planet(B, Vec3::new(1.0, 2.0, 3.0));
        },
    ];
    for start in starts {
        let mut f = FocusCoordinator::new();
        start(&mut f);
        f.close();
        assert_eq!(f.state(), FocusState::Overview);
        assert!(f.overlay().is_none());
        assert!(f.free_camera_enabled());
    }
}

#[test]
fn close_in_overview_is_a_no_op() {
    let mut f = FocusCoordinator::new();
    assert!(!f.close());
    assert!(!f.is_transitioning());
}

#[test]
fn last_request_wins_even_mid_transition() {
    let mut f = FocusCoordinator::new();
    f.focus_sun();
    assert!(f.is_transitioning());
    assert!(f.focus_planet(B, Vec3::X));
    assert_eq!(f.focused_planet(), Some(B));
    assert!(f.focus_planet(A, Vec3::Z));
    assert_eq!(f.focused_planet(), Some(A));
    assert!(f.focus_sun());
    assert!(f.is_sun_focused());
    assert!(matches!(f.overlay(), Some(OverlayView::Sun(_))));
}

#[test]
fn switching_planets_recaptures_position() {
    let mut f = FocusCoordinator::new();
    f.focus_planet(A, Vec3::X);
    f.focus_planet(B, Vec3::Y);
    assert_eq!(
        f.state(),
        FocusState::PlanetFocused {
            planet: B,
            position: Vec3::Y
        }
    );
}

#[test]
fn unknown_planet_is_ignored() {
    let mut f = FocusCoordinator::new();
    assert!(!f.focus_planet(PlanetId(99), Vec3::ZERO));
    assert_eq!(f.state(), FocusState::Overview);
}

#[test]
fn settling_never_changes_focus() {
    let mut f = FocusCoordinator::new();
    f.focus_sun();
    f.mark_settled();
    assert!(f.is_sun_focused());
    assert!(!f.is_transitioning());
}

#[test]
fn apply_dispatches_requests() {
    let mut f = FocusCoordinator::new();
    assert!(f.apply(SceneRequest::FocusPlanet {
        planet: A,
        position: Vec3::ONE
    }));
    assert!(f.apply(SceneRequest::Close));
    assert_eq!(f.state(), FocusState::Overview);
}
