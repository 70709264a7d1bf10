use super::constants::{
    SATELLITE_HEIGHT, SATELLITE_ORBIT_RADIUS, SATELLITE_ORBIT_SPEED,
};
use super::content::{self, PlanetPayload};
use glam::Vec3;
use std::f32::consts::PI;

/// Index into [`PLANETS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanetId(pub usize);

/// Anything in the scene that reacts to hover and click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pickable {
    Sun,
    Planet(PlanetId),
    Project(usize),
    Satellite,
    Station,
}

/// Immutable description of an orbiting body.
///
/// - `orbit_radius`: distance from the sun in the XZ plane
/// - `angular_speed`: radians per second
/// - `phase`: angular offset so bodies sharing a radius are spread out
/// - `y_offset`: constant height above the orbital plane
/// - `size`: sphere radius in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBodyConfig {
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub phase: f32,
    pub y_offset: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub texture: Option<&'static str>,
    pub payload: PlanetPayload,
}

impl CelestialBodyConfig {
    /// World position on the orbit after `elapsed_sec` seconds.
    pub fn orbital_position(&self, elapsed_sec: f32) -> Vec3 {
        let t = elapsed_sec * self.angular_speed + self.phase;
        Vec3::new(
            t.cos() * self.orbit_radius,
            self.y_offset,
            t.sin() * self.orbit_radius,
        )
    }
}

pub const SUN_TEXTURE: &str = "textures/2k_sun.jpg";
pub const SUN_COLOR: [f32; 3] = [1.0, 0.4, 0.0];

pub const PLANETS: [CelestialBodyConfig; 3] = [
    CelestialBodyConfig {
        orbit_radius: 8.0,
        angular_speed: 0.25,
        phase: 0.0,
        y_offset: 0.0,
        size: 1.4,
        color: [0.294, 0.612, 0.827], // #4B9CD3
        texture: Some("textures/2k_jupiter.jpg"),
        payload: content::LAB,
    },
    CelestialBodyConfig {
        orbit_radius: 8.0,
        angular_speed: 0.2,
        phase: 2.0 * PI / 3.0,
        y_offset: 2.0,
        size: 1.1,
        color: [1.0, 0.42, 0.42], // #FF6B6B
        texture: Some("textures/2k_mars.jpg"),
        payload: content::STRATEGY_KILN,
    },
    CelestialBodyConfig {
        orbit_radius: 8.0,
        angular_speed: 0.18,
        phase: 4.0 * PI / 3.0,
        y_offset: -2.0,
        size: 1.2,
        color: [0.298, 0.686, 0.314], // #4CAF50
        texture: Some("textures/2k_jupiter.jpg"),
        payload: content::GEORGIA_TECH,
    },
];

pub const PROJECT_STAR_POSITIONS: [Vec3; 6] = [
    Vec3::new(6.0, 4.0, 6.0),
    Vec3::new(-6.0, 4.0, -6.0),
    Vec3::new(8.0, -2.0, 5.0),
    Vec3::new(-8.0, -2.0, -5.0),
    Vec3::new(5.0, -4.0, -7.0),
    Vec3::new(-5.0, -4.0, 7.0),
];

pub const PROJECT_STAR_COLOR: [f32; 3] = [1.0, 0.843, 0.0]; // #FFD700
pub const SATELLITE_COLOR: [f32; 3] = [0.67, 0.67, 0.67];
pub const STATION_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

#[inline]
pub fn planet(id: PlanetId) -> Option<&'static CelestialBodyConfig> {
    PLANETS.get(id.0)
}

/// Every distinct texture path referenced by the scene, sun first.
pub fn texture_paths() -> Vec<&'static str> {
    let mut paths = vec![SUN_TEXTURE];
    for p in PLANETS.iter() {
        if let Some(t) = p.texture {
            if !paths.contains(&t) {
                paths.push(t);
            }
        }
    }
    paths
}

pub fn satellite_position(elapsed_sec: f32) -> Vec3 {
    let t = elapsed_sec * SATELLITE_ORBIT_SPEED;
    Vec3::new(
        t.cos() * SATELLITE_ORBIT_RADIUS,
        SATELLITE_HEIGHT,
        t.sin() * SATELLITE_ORBIT_RADIUS,
    )
}
