pub mod animator;
pub mod bodies;
pub mod camera_rig;
pub mod constants;
pub mod contact;
pub mod content;
pub mod controls;
pub mod easing;
pub mod focus;
pub mod loading;
pub mod quality;
pub mod scene;
pub mod starfield;

pub use animator::{DampedValue, DampedVector3};
pub use bodies::{Pickable, PlanetId};
pub use camera_rig::{CameraPose, Viewport};
pub use focus::{FocusState, OverlayView, SceneRequest};
pub use quality::{QualityMonitor, QualitySettings};
pub use scene::{Scene, SceneEffect, SceneSnapshot};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
