// Host-side tests for adaptive quality selection.
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
mod quality {
    include!("../src/core/quality.rs");
}

use camera_rig::Viewport;
use quality::*;

fn feed(m: &mut QualityMonitor, fps: f32) -> Option<QualitySettings> {
    let mut changed = None;
    for _ in 0..SAMPLE_FRAMES {
        if let Some(s) = m.record_frame(1.0 / fps) {
            changed = Some(s);
        }
    }
    changed
}

#[test]
fn tiers_follow_fps_thresholds() {
    assert_eq!(tier_for_fps(20.0), Some(QualityTier::Low));
    assert_eq!(tier_for_fps(29.9), Some(QualityTier::Low));
    assert_eq!(tier_for_fps(30.0), Some(QualityTier::Medium));
    assert_eq!(tier_for_fps(44.9), Some(QualityTier::Medium));
    assert_eq!(tier_for_fps(45.0), None);
    assert_eq!(tier_for_fps(54.9), None);
    assert_eq!(tier_for_fps(55.0), Some(QualityTier::High));
    assert_eq!(tier_for_fps(144.0), Some(QualityTier::High));
}

#[test]
fn tier_settings() {
    let low = QualitySettings::for_tier(QualityTier::Low);
    assert!(!low.bloom && !low.camera_shake && !low.atmosphere_effects);
    assert_eq!((low.star_count, low.sparkle_count), (3000, 50));

    let medium = QualitySettings::for_tier(QualityTier::Medium);
    assert!(!medium.bloom && medium.atmosphere_effects);
    assert_eq!((medium.star_count, medium.sparkle_count), (5000, 100));

    let high = QualitySettings::for_tier(QualityTier::High);
    assert!(high.bloom && high.camera_shake && high.atmosphere_effects);
    assert_eq!((high.star_count, high.sparkle_count), (7000, 200));
}

#[test]
fn mobile_starts_with_fewer_stars() {
    let mobile = QualitySettings::initial(Viewport::Mobile);
    let desktop = QualitySettings::initial(Viewport::Desktop);
    assert!(mobile.star_count < desktop.star_count);
    assert_eq!(mobile.tier, QualityTier::High);
}

#[test]
fn monitor_samples_once_per_window() {
    let mut m = QualityMonitor::new(QualitySettings::initial(Viewport::Desktop));
    for _ in 0..SAMPLE_FRAMES - 1 {
        assert_eq!(m.record_frame(1.0 / 20.0), None);
    }
    assert!(m.last_fps().is_none());
    let low = m.record_frame(1.0 / 20.0).expect("downgrade");
    assert_eq!(low.tier, QualityTier::Low);
    assert!((m.last_fps().unwrap_or(0.0) - 20.0).abs() < 0.1);
}

#[test]
fn hysteresis_band_keeps_current_tier() {
    let mut m = QualityMonitor::new(QualitySettings::for_tier(QualityTier::Medium));
    assert_eq!(feed(&mut m, 50.0), None);
    assert_eq!(m.settings().tier, QualityTier::Medium);
    let high = feed(&mut m, 60.0).expect("upgrade");
    assert_eq!(high.tier, QualityTier::High);
    assert!(high.bloom);
}

#[test]
fn same_tier_keeps_viewport_star_counts() {
    let initial = QualitySettings::initial(Viewport::Mobile);
    let mut m = QualityMonitor::new(initial);
    assert_eq!(feed(&mut m, 60.0), None);
    assert_eq!(m.settings(), initial);
}
