//! Pure scene rendering: smoothed progress in, a full visual frame out.
//!
//! Stateless given a progress value; calling it twice with the same input
//! yields the same frame, and nothing accumulates between frames.

use crate::config::{EngineConfig, SceneTiming};
use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Visual parameters for one scene at a given progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub scene_opacity: f32,
    pub text_opacity: f32,
    /// Background scale (continuous zoom).
    pub scale: f32,
    /// Residual downward caption offset in CSS pixels; the caption slides up
    /// to rest as its text fades in.
    pub slide_px: f32,
}

/// Transform for one floating decorative element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub offset_px: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
}

/// One frame of output: everything the adapter needs to style its targets.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroFrame {
    /// Progress-bar fill as a fraction of full width.
    pub progress_fill: f32,
    pub scenes: SmallVec<[SceneParams; 4]>,
    pub floats: SmallVec<[FloatParams; 8]>,
}

pub fn render(config: &EngineConfig, progress: f32) -> HeroFrame {
    let p = progress.clamp(0.0, 1.0);
    HeroFrame {
        progress_fill: p,
        scenes: config.scenes.iter().map(|t| scene_params(t, p)).collect(),
        floats: (0..config.float_count)
            .map(|i| float_params(i, p))
            .collect(),
    }
}

fn scene_params(timing: &SceneTiming, p: f32) -> SceneParams {
    let text_opacity = timing.text_opacity(p);
    SceneParams {
        scene_opacity: timing.scene_opacity(p),
        text_opacity,
        scale: timing.scale(p),
        slide_px: SLIDE_MAX_PX * (1.0 - text_opacity),
    }
}

/// Floats rise continuously through the whole scroll, each offset further by
/// a depth term proportional to its index, rotating in alternating
/// directions by index parity. Their fade-in completes early and they stay
/// fully visible after.
pub fn float_params(index: usize, p: f32) -> FloatParams {
    let lift = -FLOAT_LIFT_PX * p;
    let parallax = (index as f32 + 1.0) * FLOAT_PARALLAX_UNIT_PX;
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    FloatParams {
        offset_px: Vec2::new(0.0, lift + p * parallax),
        rotation_deg: p * FLOAT_TURN_DEG * direction,
        opacity: (p * FLOAT_FADE_IN_RATE).min(1.0),
    }
}
