use super::bodies::{self, PlanetId};
use super::content::{self, PlanetPayload, SunPayload};
use glam::Vec3;

/// Which body, if any, the camera is steering toward.
///
/// `PlanetFocused` keeps the planet position captured at click time; it is
/// never re-sampled while the state is held.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FocusState {
    #[default]
    Overview,
    SunFocused,
    PlanetFocused { planet: PlanetId, position: Vec3 },
}

/// Requests children may raise; only the scene root applies them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneRequest {
    FocusSun,
    FocusPlanet { planet: PlanetId, position: Vec3 },
    Close,
}

/// Overlay content derived from the focus state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayView {
    Sun(SunPayload),
    Planet {
        planet: PlanetId,
        payload: PlanetPayload,
        color: [f32; 3],
    },
}

/// Owns the focus state machine and its cosmetic `transitioning` flag.
///
/// `transitioning` is raised on every state change and cleared by
/// [`FocusCoordinator::mark_settled`] once the camera arrives. It never gates
/// which transitions are allowed.
#[derive(Clone, Debug, Default)]
pub struct FocusCoordinator {
    state: FocusState,
    transitioning: bool,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> FocusState {
        self.state
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Apply a request; returns true when the state changed. Last write wins.
    pub fn apply(&mut self, request: SceneRequest) -> bool {
        let next = match request {
            SceneRequest::FocusSun => FocusState::SunFocused,
            SceneRequest::FocusPlanet { planet, position } => {
                if bodies::planet(planet).is_none() {
                    log::warn!("[focus] ignoring unknown planet {}", planet.0);
                    return false;
                }
                match self.state {
                    // Re-clicking the focused planet keeps the first capture.
                    FocusState::PlanetFocused { planet: current, .. } if current == planet => {
                        return false;
                    }
                    _ => FocusState::PlanetFocused { planet, position },
                }
            }
            SceneRequest::Close => FocusState::Overview,
        };
        if next == self.state {
            return false;
        }
        log::info!("[focus] {:?} -> {:?}", self.state, next);
        self.state = next;
        self.transitioning = true;
        true
    }

    pub fn focus_sun(&mut self) -> bool {
        self.apply(SceneRequest::FocusSun)
    }

    pub fn focus_planet(&mut self, planet: PlanetId, position: Vec3) -> bool {
        self.apply(SceneRequest::FocusPlanet { planet, position })
    }

    pub fn close(&mut self) -> bool {
        self.apply(SceneRequest::Close)
    }

    pub fn mark_settled(&mut self) {
        self.transitioning = false;
    }

    /// Orbit/pan/zoom input is only honoured in the overview.
    #[inline]
    pub fn free_camera_enabled(&self) -> bool {
        matches!(self.state, FocusState::Overview)
    }

    #[inline]
    pub fn is_sun_focused(&self) -> bool {
        matches!(self.state, FocusState::SunFocused)
    }

    #[inline]
    pub fn focused_planet(&self) -> Option<PlanetId> {
        match self.state {
            FocusState::PlanetFocused { planet, .. } => Some(planet),
            _ => None,
        }
    }

    pub fn overlay(&self) -> Option<OverlayView> {
        match self.state {
            FocusState::Overview => None,
            FocusState::SunFocused => Some(OverlayView::Sun(content::SUN)),
            FocusState::PlanetFocused { planet, .. } => {
                bodies::planet(planet).map(|cfg| OverlayView::Planet {
                    planet,
                    payload: cfg.payload,
                    color: cfg.color,
                })
            }
        }
    }
}
