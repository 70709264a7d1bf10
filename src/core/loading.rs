// Texture preload bookkeeping and loading-screen phases.

pub const WELCOME_DELAY_SEC: f32 = 0.5;
pub const COMPLETE_DELAY_SEC: f32 = 2.0;

/// Outcome of one asset load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    /// All assets settled; `since` counts seconds since reaching 100%.
    Welcome { since: f32 },
    Done,
}

/// Counts settled loads against a fixed total. Failures count toward
/// progress: a missing texture never blocks startup.
#[derive(Clone, Debug)]
pub struct LoadTracker {
    total: usize,
    loaded: usize,
    failed: usize,
    phase: LoadPhase,
}

impl LoadTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            failed: 0,
            phase: if total == 0 {
                LoadPhase::Welcome { since: 0.0 }
            } else {
                LoadPhase::Loading
            },
        }
    }

    pub fn record(&mut self, outcome: LoadOutcome) {
        if self.settled() >= self.total {
            return;
        }
        match outcome {
            LoadOutcome::Loaded => self.loaded += 1,
            LoadOutcome::Failed => self.failed += 1,
        }
        if self.settled() >= self.total && self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Welcome { since: 0.0 };
        }
    }

    #[inline]
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    #[inline]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn progress_percent(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        (self.settled() as f32 / self.total as f32 * 100.0).clamp(0.0, 100.0)
    }

    #[inline]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether the welcome line replaces the progress bar.
    pub fn show_welcome(&self) -> bool {
        match self.phase {
            LoadPhase::Welcome { since } => since >= WELCOME_DELAY_SEC,
            LoadPhase::Done => true,
            LoadPhase::Loading => false,
        }
    }

    /// Advance the post-load timers; returns true when the phase changed.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if let LoadPhase::Welcome { since } = self.phase {
            let t = since + dt_sec.max(0.0);
            if t >= COMPLETE_DELAY_SEC {
                self.phase = LoadPhase::Done;
                return true;
            }
            self.phase = LoadPhase::Welcome { since: t };
        }
        false
    }
}
