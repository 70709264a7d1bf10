use super::constants::{SUN_FLARE_COUNT, SUN_FLARE_DISTANCE};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

pub const STAR_SHELL_RADIUS: f32 = 150.0;
pub const STAR_SHELL_DEPTH: f32 = 50.0;
pub const SPARKLE_CUBE: f32 = 120.0;

/// One background point: position, base brightness and twinkle phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPoint {
    pub position: Vec3,
    pub brightness: f32,
    pub phase: f32,
}

fn random_unit(rng: &mut StdRng) -> Vec3 {
    // uniform on the sphere
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let a: f32 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * a.cos(), z, r * a.sin())
}

/// Distant stars in a shell `[radius, radius + depth]` around the origin.
pub fn generate_stars(count: u32, seed: u64) -> Vec<StarPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let dist = STAR_SHELL_RADIUS + rng.gen::<f32>() * STAR_SHELL_DEPTH;
            StarPoint {
                position: random_unit(&mut rng) * dist,
                brightness: rng.gen_range(0.35..1.0),
                phase: rng.gen_range(0.0..TAU),
            }
        })
        .collect()
}

/// Closer drifting sparkles inside a cube of side [`SPARKLE_CUBE`].
pub fn generate_sparkles(count: u32, seed: u64) -> Vec<StarPoint> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5EED_5EED);
    let half = SPARKLE_CUBE * 0.5;
    (0..count)
        .map(|_| StarPoint {
            position: Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ),
            brightness: rng.gen_range(0.6..1.4),
            phase: rng.gen_range(0.0..TAU),
        })
        .collect()
}

/// Solar flare anchors on a ring around the sun with random heights.
pub fn generate_flares(seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SUN_FLARE_COUNT)
        .map(|i| {
            let angle = i as f32 / SUN_FLARE_COUNT as f32 * TAU;
            let height = rng.gen::<f32>() * 2.0 + 1.0;
            Vec3::new(
                angle.cos() * SUN_FLARE_DISTANCE,
                (rng.gen::<f32>() - 0.5) * height,
                angle.sin() * SUN_FLARE_DISTANCE,
            )
        })
        .collect()
}
