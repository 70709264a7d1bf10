use super::camera_rig::Viewport;

/// Frames per FPS sample window.
pub const SAMPLE_FRAMES: u32 = 60;
pub const LOW_FPS: f32 = 30.0;
pub const MEDIUM_FPS: f32 = 45.0;
pub const HIGH_FPS: f32 = 55.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualitySettings {
    pub tier: QualityTier,
    pub bloom: bool,
    pub atmosphere_effects: bool,
    pub camera_shake: bool,
    pub star_count: u32,
    pub sparkle_count: u32,
}

impl QualitySettings {
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Low => Self {
                tier,
                bloom: false,
                atmosphere_effects: false,
                camera_shake: false,
                star_count: 3000,
                sparkle_count: 50,
            },
            QualityTier::Medium => Self {
                tier,
                bloom: false,
                atmosphere_effects: true,
                camera_shake: false,
                star_count: 5000,
                sparkle_count: 100,
            },
            QualityTier::High => Self {
                tier,
                bloom: true,
                atmosphere_effects: true,
                camera_shake: true,
                star_count: 7000,
                sparkle_count: 200,
            },
        }
    }

    /// Starting point before any FPS sample exists.
    pub fn initial(viewport: Viewport) -> Self {
        let mut s = Self::for_tier(QualityTier::High);
        match viewport {
            Viewport::Mobile => {
                s.star_count = 3000;
                s.sparkle_count = 100;
            }
            Viewport::Desktop => {
                s.star_count = 5000;
                s.sparkle_count = 200;
            }
        }
        s
    }
}

/// Tier for a measured frame rate; `None` inside the hysteresis band.
pub fn tier_for_fps(fps: f32) -> Option<QualityTier> {
    if fps < LOW_FPS {
        Some(QualityTier::Low)
    } else if fps < MEDIUM_FPS {
        Some(QualityTier::Medium)
    } else if fps >= HIGH_FPS {
        Some(QualityTier::High)
    } else {
        None
    }
}

/// Samples frame rate every [`SAMPLE_FRAMES`] frames and adapts settings.
#[derive(Clone, Debug)]
pub struct QualityMonitor {
    settings: QualitySettings,
    frames: u32,
    window_sec: f32,
    last_fps: Option<f32>,
}

impl QualityMonitor {
    pub fn new(initial: QualitySettings) -> Self {
        Self {
            settings: initial,
            frames: 0,
            window_sec: 0.0,
            last_fps: None,
        }
    }

    #[inline]
    pub fn settings(&self) -> QualitySettings {
        self.settings
    }

    #[inline]
    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }

    /// Record one frame; returns the new settings when the tier changed.
    pub fn record_frame(&mut self, dt_sec: f32) -> Option<QualitySettings> {
        self.frames += 1;
        self.window_sec += dt_sec.max(0.0);
        if self.frames < SAMPLE_FRAMES {
            return None;
        }
        let fps = if self.window_sec > 0.0 {
            self.frames as f32 / self.window_sec
        } else {
            f32::INFINITY
        };
        self.frames = 0;
        self.window_sec = 0.0;
        self.last_fps = Some(fps);

        let tier = tier_for_fps(fps)?;
        if tier == self.settings.tier {
            return None;
        }
        let next = QualitySettings::for_tier(tier);
        log::info!("[quality] fps={:.1} -> {:?}", fps, tier);
        self.settings = next;
        Some(next)
    }
}
