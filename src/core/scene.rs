use super::animator::{DampedValue, DampedVector3};
use super::bodies::{self, PlanetId, Pickable, PLANETS, PROJECT_STAR_POSITIONS};
use super::camera_rig::{self, CameraEffects, CameraPose, CameraRig, Viewport};
use super::constants::*;
use super::content::{self, PROJECTS};
use super::controls::OrbitControls;
use super::easing::{approach, exp_lerp_factor, ramp};
use super::focus::{FocusCoordinator, FocusState, OverlayView, SceneRequest};
use super::quality::QualitySettings;
use super::starfield;
use glam::{Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

const FLARE_SEED: u64 = 7;
const ORBIT_PARTICLES: usize = 8;

/// Side effects the web shell performs on behalf of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEffect {
    OpenUrl(&'static str),
}

/// What the renderer should draw for a body sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyInstance {
    pub center: Vec3,
    pub radius: f32,
    pub spin: f32,
    pub color: [f32; 3],
    /// Self-illumination added on top of lighting (sun, flares, stars).
    pub emissive: f32,
    pub texture: Option<&'static str>,
}

/// Additive translucent shell around a body (glow, atmosphere, corona).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowShell {
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverLabel {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub anchor: Vec3,
    pub opacity: f32,
}

/// Everything one frame needs, derived from the scene after `step`.
#[derive(Clone, Debug)]
pub struct SceneSnapshot {
    pub elapsed: f32,
    pub camera: CameraPose,
    pub bodies: SmallVec<[BodyInstance; 32]>,
    pub glows: SmallVec<[GlowShell; 16]>,
    pub orbit_rings: SmallVec<[f32; 4]>,
    pub label: Option<HoverLabel>,
    pub overlay: Option<OverlayView>,
    pub free_camera: bool,
    pub transitioning: bool,
}

#[derive(Clone, Debug)]
struct PlanetState {
    anchor: Vec3,
    float: DampedVector3,
    scale: DampedValue,
    spin: f32,
    label: f32,
    glow_opacity: f32,
    atmosphere_opacity: f32,
}

#[derive(Clone, Debug)]
struct SunState {
    scale: DampedValue,
    float_y: f32,
    spin: f32,
    corona_opacity: f32,
    glow_scale: f32,
    glow_opacity: f32,
    flare_spin: f32,
}

/// Hover-scaled body that only opens a link when clicked.
#[derive(Clone, Debug)]
struct LinkBodyState {
    scale: DampedValue,
    spin: f32,
}

impl LinkBodyState {
    fn new() -> Self {
        Self {
            scale: DampedValue::new(1.0, SCALE_DAMPING, SCALE_MAX_VELOCITY),
            spin: 0.0,
        }
    }

    fn step(&mut self, hovered: bool, hover_scale: f32, spin_per_sec: f32, dt: f32) {
        self.scale
            .set_target(if hovered { hover_scale } else { 1.0 });
        self.scale.update(dt);
        self.spin = (self.spin + dt * spin_per_sec) % TAU;
    }
}

/// Scene root: sole owner of the focus state. Bodies and DOM handlers only
/// reach it through [`Scene::click`] and [`Scene::request`].
pub struct Scene {
    elapsed: f32,
    viewport: Viewport,
    focus: FocusCoordinator,
    rig: CameraRig,
    controls: OrbitControls,
    quality: QualitySettings,
    planets: Vec<PlanetState>,
    sun: SunState,
    satellite: LinkBodyState,
    station: LinkBodyState,
    projects: Vec<LinkBodyState>,
    flares: Vec<Vec3>,
    hover: Option<Pickable>,
}

impl Scene {
    pub fn new(viewport: Viewport, quality: QualitySettings) -> Self {
        let planets = PLANETS
            .iter()
            .map(|cfg| {
                let anchor = cfg.orbital_position(0.0);
                PlanetState {
                    anchor,
                    float: DampedVector3::new(Vec3::ZERO, FLOAT_DAMPING, FLOAT_MAX_VELOCITY),
                    scale: DampedValue::new(1.0, SCALE_DAMPING, SCALE_MAX_VELOCITY),
                    spin: 0.0,
                    label: 0.0,
                    glow_opacity: 0.2,
                    atmosphere_opacity: 0.3,
                }
            })
            .collect();
        let controls = OrbitControls::new(viewport);
        let mut rig = CameraRig::new(viewport);
        rig.snap(camera_rig::target_for(
            FocusState::Overview,
            viewport,
            controls.eye(),
            controls.target(),
            0.0,
        ));
        Self {
            elapsed: 0.0,
            viewport,
            focus: FocusCoordinator::new(),
            rig,
            controls,
            quality,
            planets,
            sun: SunState {
                scale: DampedValue::new(1.0, SCALE_DAMPING, SCALE_MAX_VELOCITY),
                float_y: 0.0,
                spin: 0.0,
                corona_opacity: 0.25,
                glow_scale: 1.0,
                glow_opacity: 0.4,
                flare_spin: 0.0,
            },
            satellite: LinkBodyState::new(),
            station: LinkBodyState::new(),
            projects: (0..PROJECTS.len()).map(|_| LinkBodyState::new()).collect(),
            flares: starfield::generate_flares(FLARE_SEED),
            hover: None,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn focus(&self) -> &FocusCoordinator {
        &self.focus
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::info!("[scene] viewport {:?} -> {:?}", self.viewport, viewport);
        self.viewport = viewport;
        self.rig.set_viewport(viewport);
        self.controls.set_viewport(viewport);
    }

    pub fn set_quality(&mut self, quality: QualitySettings) {
        self.quality = quality;
    }

    pub fn set_hover(&mut self, hover: Option<Pickable>) {
        self.hover = hover;
    }

    /// Orbital position the planet is currently riding, without float.
    pub fn planet_anchor(&self, id: PlanetId) -> Option<Vec3> {
        self.planets.get(id.0).map(|p| p.anchor)
    }

    /// Focus changes go through here; returns true when the state changed.
    pub fn request(&mut self, request: SceneRequest) -> bool {
        self.focus.apply(request)
    }

    /// Dispatch a click on a body. Focusable bodies raise a focus request;
    /// link bodies hand back the URL to open.
    pub fn click(&mut self, target: Pickable) -> Option<SceneEffect> {
        match target {
            Pickable::Sun => {
                self.request(SceneRequest::FocusSun);
                None
            }
            Pickable::Planet(planet) => {
                if let Some(position) = self.planet_anchor(planet) {
                    self.request(SceneRequest::FocusPlanet { planet, position });
                }
                None
            }
            Pickable::Project(i) => PROJECTS.get(i).map(|p| SceneEffect::OpenUrl(p.url)),
            Pickable::Satellite => Some(SceneEffect::OpenUrl(content::RESUME_URL)),
            Pickable::Station => Some(SceneEffect::OpenUrl(content::LINKEDIN_URL)),
        }
    }

    /// Hit spheres for ray picking, in world space.
    pub fn pick_spheres(&self) -> SmallVec<[(Pickable, Vec3, f32); 16]> {
        let mut out = SmallVec::new();
        out.push((
            Pickable::Sun,
            Vec3::new(0.0, self.sun.float_y, 0.0),
            SUN_RADIUS * self.sun.scale.value(),
        ));
        for (i, (cfg, st)) in PLANETS.iter().zip(self.planets.iter()).enumerate() {
            out.push((
                Pickable::Planet(PlanetId(i)),
                st.anchor + st.float.value(),
                cfg.size * st.scale.value(),
            ));
        }
        for (i, pos) in PROJECT_STAR_POSITIONS.iter().enumerate() {
            out.push((Pickable::Project(i), *pos, PROJECT_STAR_PICK_RADIUS));
        }
        out.push((
            Pickable::Satellite,
            bodies::satellite_position(self.elapsed),
            SATELLITE_SIZE * 1.5 * self.satellite.scale.value(),
        ));
        out.push((
            Pickable::Station,
            STATION_POSITION,
            STATION_PICK_RADIUS * self.station.scale.value(),
        ));
        out
    }

    /// Advance the whole scene by `dt_sec` and describe the frame.
    pub fn step(&mut self, dt_sec: f32) -> SceneSnapshot {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        let t = self.elapsed;

        self.controls.set_enabled(self.focus.free_camera_enabled());
        self.controls.update(dt);

        let focused_planet = self.focus.focused_planet();
        let orbit_blend = exp_lerp_factor(ORBIT_LERP_BASE, dt);
        for (i, (cfg, st)) in PLANETS.iter().zip(self.planets.iter_mut()).enumerate() {
            let id = PlanetId(i);
            let focused = focused_planet == Some(id);
            let hovered = self.hover == Some(Pickable::Planet(id));
            let active = focused || hovered;

            // The focused planet holds still; the rest keep orbiting.
            if !focused {
                let orbit = cfg.orbital_position(t);
                st.anchor = st.anchor.lerp(orbit, orbit_blend);
                st.anchor.y = cfg.y_offset;
            }

            let (scale, float) = if focused {
                (PLANET_FOCUS_SCALE, (t * 2.0).sin() * PLANET_FOCUS_FLOAT)
            } else if hovered {
                (PLANET_HOVER_SCALE, (t * 3.0).sin() * PLANET_HOVER_FLOAT)
            } else {
                (1.0, 0.0)
            };
            st.scale.set_target(scale);
            st.scale.update(dt);
            st.float.set_target(Vec3::new(0.0, float, 0.0));
            st.float.update(dt);
            st.spin = (st.spin + dt * PLANET_SPIN_PER_SEC) % TAU;
            st.label = if active {
                ramp(st.label, 1.0, LABEL_FADE_IN_PER_SEC, dt)
            } else {
                ramp(st.label, 0.0, LABEL_FADE_OUT_PER_SEC, dt)
            };
            let glow_target = if active { 0.4 } else { 0.2 };
            st.glow_opacity = approach(st.glow_opacity, glow_target, GLOW_LERP_PER_FRAME, dt);
            let atmo_target = (t * 1.5).sin() * 0.2 + if active { 0.6 } else { 0.3 };
            st.atmosphere_opacity =
                approach(st.atmosphere_opacity, atmo_target, GLOW_LERP_PER_FRAME, dt);
        }

        self.step_sun(dt, t);
        let hover = self.hover;
        self.satellite.step(
            hover == Some(Pickable::Satellite),
            SATELLITE_HOVER_SCALE,
            0.6,
            dt,
        );
        self.station
            .step(hover == Some(Pickable::Station), STATION_HOVER_SCALE, 0.0, dt);
        for (i, p) in self.projects.iter_mut().enumerate() {
            p.step(
                hover == Some(Pickable::Project(i)),
                1.2,
                PROJECT_STAR_SPIN_PER_SEC,
                dt,
            );
        }

        let target = camera_rig::target_for(
            self.focus.state(),
            self.viewport,
            self.controls.eye(),
            self.controls.target(),
            t,
        );
        self.rig.retarget(target);
        let sun_focused = self.focus.is_sun_focused();
        let effects = CameraEffects {
            // a running transition shakes even when the quality tier disables it
            shake: sun_focused && (self.quality.camera_shake || self.focus.is_transitioning()),
            breathe: focused_planet.is_some(),
        };
        let camera = self.rig.update(dt, t, effects);
        if self.focus.is_transitioning() && self.rig.is_settled() {
            log::debug!("[focus] camera settled");
            self.focus.mark_settled();
        }

        self.snapshot(camera)
    }

    fn step_sun(&mut self, dt: f32, t: f32) {
        let focused = self.focus.is_sun_focused();
        let hovered = self.hover == Some(Pickable::Sun);
        let active = focused || hovered;
        let sun = &mut self.sun;

        sun.scale.set_target(if focused {
            SUN_FOCUS_SCALE
        } else if hovered {
            SUN_HOVER_SCALE
        } else {
            1.0
        });
        sun.scale.update(dt);
        sun.spin = (sun.spin + dt * SUN_SPIN_PER_SEC) % TAU;
        sun.flare_spin = (sun.flare_spin + dt * 0.3) % TAU;
        sun.float_y = if active {
            (t * 2.0).sin() * SUN_FLOAT_AMPLITUDE
        } else {
            approach(sun.float_y, 0.0, GLOW_LERP_PER_FRAME, dt)
        };

        let pulse = (t * 1.2).sin() * 0.3 + 0.7;
        let corona_target = if active { 0.4 } else { 0.25 } * pulse;
        sun.corona_opacity = approach(sun.corona_opacity, corona_target, GLOW_LERP_PER_FRAME, dt);
        let breathing = 1.0 + (t * 1.5).sin() * 0.15;
        let glow_scale_target = if active { breathing * 1.2 } else { breathing };
        sun.glow_scale = approach(sun.glow_scale, glow_scale_target, 0.08, dt);
        let glow_opacity_target = if active { 0.6 } else { 0.4 };
        sun.glow_opacity = approach(sun.glow_opacity, glow_opacity_target, GLOW_LERP_PER_FRAME, dt);
    }

    fn snapshot(&self, camera: CameraPose) -> SceneSnapshot {
        let t = self.elapsed;
        let atmosphere = self.quality.atmosphere_effects;
        let mut instances: SmallVec<[BodyInstance; 32]> = SmallVec::new();
        let mut glows: SmallVec<[GlowShell; 16]> = SmallVec::new();

        // Sun and its shells
        let sun_center = Vec3::new(0.0, self.sun.float_y, 0.0);
        let sun_scale = self.sun.scale.value();
        let sun_active = self.focus.is_sun_focused() || self.hover == Some(Pickable::Sun);
        instances.push(BodyInstance {
            center: sun_center,
            radius: SUN_RADIUS * sun_scale,
            spin: self.sun.spin,
            color: bodies::SUN_COLOR,
            emissive: if sun_active { 1.2 } else { 0.8 },
            texture: Some(bodies::SUN_TEXTURE),
        });
        glows.push(GlowShell {
            center: sun_center,
            radius: 5.0 * self.sun.glow_scale,
            color: [1.0, 0.4, 0.0],
            opacity: self.sun.glow_opacity,
        });
        glows.push(GlowShell {
            center: sun_center,
            radius: 3.1 * sun_scale,
            color: [1.0, 0.667, 0.0],
            opacity: 0.4,
        });
        if atmosphere {
            let temperature = (t * 0.8).sin() * 0.1 + 0.9;
            glows.push(GlowShell {
                center: sun_center,
                radius: 4.2,
                color: [1.0, temperature * 0.8, temperature * 0.4],
                opacity: self.sun.corona_opacity,
            });
        }
        let flare_rot = Quat::from_rotation_y(self.sun.flare_spin);
        for (i, anchor) in self.flares.iter().enumerate() {
            let intensity = ((t + i as f32 * 0.5) * 3.0).sin() * 0.5 + 0.5;
            let scale = intensity * if sun_active { 1.5 } else { 1.0 };
            if scale <= 0.01 {
                continue;
            }
            instances.push(BodyInstance {
                center: sun_center + flare_rot * *anchor,
                radius: SUN_FLARE_SIZE * scale,
                spin: 0.0,
                color: [1.0, 1.0, 0.0],
                emissive: intensity * 0.8 * 2.0,
                texture: None,
            });
        }

        // Planets
        let focused_planet = self.focus.focused_planet();
        for (i, (cfg, st)) in PLANETS.iter().zip(self.planets.iter()).enumerate() {
            let id = PlanetId(i);
            let center = st.anchor + st.float.value();
            let scale = st.scale.value();
            let active = focused_planet == Some(id) || self.hover == Some(Pickable::Planet(id));
            instances.push(BodyInstance {
                center,
                radius: cfg.size * scale,
                spin: st.spin,
                color: cfg.color,
                emissive: if active { 0.2 } else { 0.1 },
                texture: cfg.texture,
            });
            let glow_radius = cfg.size * scale * if active { 1.65 } else { 1.4 };
            glows.push(GlowShell {
                center,
                radius: glow_radius,
                color: cfg.color,
                opacity: st.glow_opacity,
            });
            if atmosphere {
                let pulse = if active { (t * 4.0).sin() * 0.3 + 0.7 } else { 1.0 };
                glows.push(GlowShell {
                    center,
                    radius: cfg.size * 1.05 * scale,
                    color: [cfg.color[0] * pulse, cfg.color[1] * pulse, cfg.color[2] * pulse],
                    opacity: st.atmosphere_opacity,
                });
            }
            if active {
                for k in 0..ORBIT_PARTICLES {
                    let angle = k as f32 / ORBIT_PARTICLES as f32 * TAU;
                    let r = cfg.size * 1.5 * scale;
                    let speed = 2.0 + k as f32 * 0.3;
                    instances.push(BodyInstance {
                        center: center
                            + Vec3::new(angle.cos() * r, (t * speed).sin() * 0.3, angle.sin() * r),
                        radius: 0.03,
                        spin: 0.0,
                        color: cfg.color,
                        emissive: 0.8,
                        texture: None,
                    });
                }
            }
        }

        // Link bodies
        for (pos, st) in PROJECT_STAR_POSITIONS.iter().zip(self.projects.iter()) {
            instances.push(BodyInstance {
                center: *pos,
                radius: PROJECT_STAR_RADIUS * st.scale.value(),
                spin: st.spin,
                color: bodies::PROJECT_STAR_COLOR,
                emissive: 0.5,
                texture: None,
            });
        }
        let sat_hover = self.hover == Some(Pickable::Satellite);
        instances.push(BodyInstance {
            center: bodies::satellite_position(t),
            radius: SATELLITE_SIZE * 0.5 * self.satellite.scale.value(),
            spin: self.satellite.spin,
            color: bodies::SATELLITE_COLOR,
            emissive: if sat_hover { 0.5 } else { 0.1 },
            texture: None,
        });
        instances.push(BodyInstance {
            center: STATION_POSITION,
            radius: STATION_SIZE * self.station.scale.value(),
            spin: self.station.spin,
            color: bodies::STATION_COLOR,
            emissive: 0.05,
            texture: None,
        });

        let mut orbit_rings: SmallVec<[f32; 4]> = SmallVec::new();
        for cfg in PLANETS.iter() {
            if !orbit_rings.iter().any(|r| (*r - cfg.orbit_radius).abs() < 1e-3) {
                orbit_rings.push(cfg.orbit_radius);
            }
        }

        SceneSnapshot {
            elapsed: t,
            camera,
            bodies: instances,
            glows,
            orbit_rings,
            label: self.hover_label(),
            overlay: self.focus.overlay(),
            free_camera: self.focus.free_camera_enabled(),
            transitioning: self.focus.is_transitioning(),
        }
    }

    fn hover_label(&self) -> Option<HoverLabel> {
        match self.hover {
            Some(Pickable::Sun) => Some(HoverLabel {
                title: content::SUN.name,
                subtitle: Some("Click to learn more"),
                anchor: Vec3::new(0.0, self.sun.float_y + 5.0, 0.0),
                opacity: 1.0,
            }),
            Some(Pickable::Project(i)) => PROJECTS.get(i).map(|p| HoverLabel {
                title: p.title,
                subtitle: Some(p.description),
                anchor: PROJECT_STAR_POSITIONS[i] + Vec3::Y * 0.5,
                opacity: 1.0,
            }),
            Some(Pickable::Satellite) => Some(HoverLabel {
                title: "View Resume",
                subtitle: None,
                anchor: bodies::satellite_position(self.elapsed)
                    + Vec3::Y * (SATELLITE_SIZE * 0.7 + 0.7),
                opacity: 1.0,
            }),
            Some(Pickable::Station) => Some(HoverLabel {
                title: "Connect on LinkedIn",
                subtitle: None,
                anchor: STATION_POSITION + Vec3::Y * 5.5,
                opacity: 1.0,
            }),
            // Planet labels fade in and out, so the strongest one wins even
            // after the pointer has left.
            Some(Pickable::Planet(_)) | None => PLANETS
                .iter()
                .zip(self.planets.iter())
                .filter(|(_, st)| st.label > 0.01)
                .max_by(|a, b| a.1.label.total_cmp(&b.1.label))
                .map(|(cfg, st)| HoverLabel {
                    title: cfg.payload.title,
                    subtitle: (st.label > 0.5).then_some(cfg.payload.role),
                    anchor: st.anchor
                        + st.float.value()
                        + Vec3::Y * (cfg.size * st.scale.value() + 0.5),
                    opacity: st.label,
                }),
        }
    }
}
