use super::animator::{DampedValue, DampedVector3};
use super::constants::*;
use super::focus::FocusState;
use glam::{Mat4, Vec3};

/// Layout class derived from the window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn from_width(css_width: f64) -> Self {
        if css_width < MOBILE_WIDTH_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Viewport::Desktop => 0,
            Viewport::Mobile => 1,
        }
    }

    #[inline]
    pub fn overview_eye(self) -> Vec3 {
        OVERVIEW_EYE[self.index()]
    }

    #[inline]
    pub fn overview_fov(self) -> f32 {
        OVERVIEW_FOV_DEG[self.index()]
    }
}

/// Where the camera should be heading for a focus state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub fov_deg: f32,
}

/// Camera actually used for a frame, cosmetic offsets included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub fov_deg: f32,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            aspect.max(1e-3),
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Cosmetic effects layered on top of the animated pose.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraEffects {
    pub shake: bool,
    pub breathe: bool,
}

/// Gentle idle orbit added to the overview eye.
pub fn overview_drift(elapsed_sec: f32) -> Vec3 {
    Vec3::new(
        (elapsed_sec * DRIFT_SPEED).sin() * DRIFT_RADIUS,
        (elapsed_sec * DRIFT_SPEED * 0.7).cos() * DRIFT_RADIUS * 0.3,
        0.0,
    )
}

/// Target for `state`. `overview_eye`/`overview_look` come from the orbit
/// controls so user input survives focus round trips.
pub fn target_for(
    state: FocusState,
    viewport: Viewport,
    overview_eye: Vec3,
    overview_look: Vec3,
    elapsed_sec: f32,
) -> CameraTarget {
    let vi = viewport.index();
    match state {
        FocusState::Overview => CameraTarget {
            eye: overview_eye + overview_drift(elapsed_sec),
            look_at: overview_look,
            fov_deg: OVERVIEW_FOV_DEG[vi],
        },
        FocusState::SunFocused => CameraTarget {
            eye: SUN_EYE[vi],
            look_at: Vec3::ZERO,
            fov_deg: SUN_FOV_DEG[vi],
        },
        FocusState::PlanetFocused { position, .. } => CameraTarget {
            eye: position + PLANET_EYE_OFFSET[vi],
            look_at: position,
            fov_deg: PLANET_FOV_DEG[vi],
        },
    }
}

fn shake_offset(elapsed_sec: f32) -> Vec3 {
    let t = elapsed_sec;
    Vec3::new(
        (t * 8.0).sin() * SUN_SHAKE_INTENSITY,
        (t * 6.0).cos() * SUN_SHAKE_INTENSITY,
        (t * 10.0).sin() * SUN_SHAKE_INTENSITY * 0.5,
    )
}

/// Three damped animators (eye, look-at, field of view) steered by the focus
/// state every frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    viewport: Viewport,
    eye: DampedVector3,
    look_at: DampedVector3,
    fov: DampedValue,
    target: CameraTarget,
}

impl CameraRig {
    pub fn new(viewport: Viewport) -> Self {
        let target = CameraTarget {
            eye: viewport.overview_eye(),
            look_at: Vec3::ZERO,
            fov_deg: viewport.overview_fov(),
        };
        Self {
            viewport,
            eye: DampedVector3::new(target.eye, CAMERA_EYE_DAMPING, CAMERA_MAX_VELOCITY),
            look_at: DampedVector3::new(target.look_at, CAMERA_LOOK_DAMPING, CAMERA_MAX_VELOCITY),
            fov: DampedValue::new(target.fov_deg, CAMERA_FOV_DAMPING, CAMERA_MAX_VELOCITY)
                .with_retention(VECTOR_RETENTION),
            target,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn target(&self) -> CameraTarget {
        self.target
    }

    pub fn retarget(&mut self, target: CameraTarget) {
        self.target = target;
        self.eye.set_target(target.eye);
        self.look_at.set_target(target.look_at);
        self.fov.set_target(target.fov_deg);
    }

    /// Jump straight to `target`, used on mount so the first frame does not
    /// fly in from the origin.
    pub fn snap(&mut self, target: CameraTarget) {
        self.target = target;
        self.eye.set_value(target.eye);
        self.look_at.set_value(target.look_at);
        self.fov.set_value(target.fov_deg);
    }

    /// Advance the animators and layer cosmetic offsets on top.
    pub fn update(&mut self, dt_sec: f32, elapsed_sec: f32, effects: CameraEffects) -> CameraPose {
        let mut eye = self.eye.update(dt_sec);
        let look_at = self.look_at.update(dt_sec);
        let fov_deg = self.fov.update(dt_sec).clamp(10.0, 120.0);
        if effects.shake {
            eye += shake_offset(elapsed_sec);
        }
        if effects.breathe {
            eye.y += (elapsed_sec * 2.0).sin() * PLANET_BREATH_INTENSITY;
        }
        CameraPose {
            eye,
            look_at,
            fov_deg,
        }
    }

    /// Animated pose without cosmetic offsets and without advancing.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye.value(),
            look_at: self.look_at.value(),
            fov_deg: self.fov.value(),
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.eye.distance_to_target() < SETTLE_DISTANCE
    }
}
