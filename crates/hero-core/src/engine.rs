//! Engine instance: owned scroll state plus the per-frame tick.
//!
//! Single logical thread. Event handlers only write the target progress and
//! layout mode; the frame tick owns the smoothed value and is the only place
//! rendering happens, so scroll-event frequency never drives render rate.

use crate::config::{EngineConfig, TimingError};
use crate::progress::{Mode, ScrollGeometry};
use crate::scene::{self, HeroFrame};
use crate::smoother::ProgressSmoother;
use glam::Vec2;

/// Shared scroll state, owned by the engine rather than free-standing.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    pub target_progress: f32,
    pub mode: Mode,
}

pub struct HeroEngine {
    config: EngineConfig,
    state: ScrollState,
    smoother: ProgressSmoother,
}

impl HeroEngine {
    /// Build an engine over a validated configuration. Progress starts at 0.
    pub fn new(config: EngineConfig, viewport: Vec2) -> Result<Self, TimingError> {
        config.validate()?;
        let smoother = ProgressSmoother::new(config.snap_epsilon);
        Ok(Self {
            state: ScrollState {
                target_progress: 0.0,
                mode: Mode::for_viewport(viewport),
            },
            smoother,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn target_progress(&self) -> f32 {
        self.state.target_progress
    }

    pub fn current_progress(&self) -> f32 {
        self.smoother.current()
    }

    /// Scroll event: derive and store the clamped target progress.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry) {
        self.state.target_progress = geometry.progress();
    }

    /// Resize event: recompute the layout mode, then resample the scroll
    /// geometry immediately rather than trusting a stale target.
    pub fn on_resize(&mut self, viewport: Vec2, geometry: ScrollGeometry) {
        let mode = Mode::for_viewport(viewport);
        if mode != self.state.mode {
            log::debug!("layout mode changed to {mode:?}");
            self.state.mode = mode;
        }
        self.on_scroll(geometry);
    }

    /// One animation frame: advance the smoother and render.
    pub fn tick(&mut self) -> HeroFrame {
        let damping = self.config.damping(self.state.mode);
        let p = self.smoother.step(self.state.target_progress, damping);
        scene::render(&self.config, p)
    }

    pub fn converged(&self) -> bool {
        self.smoother.converged(self.state.target_progress)
    }
}
