//! Static scene configuration.
//!
//! Per-scene timing breakpoints are data, not code: the renderer applies the
//! same piecewise-linear policy to every scene, so the windows can be tuned
//! without touching the algorithm. [`EngineConfig::default`] carries the
//! reference four-scene configuration.

use crate::constants::*;
use crate::progress::Mode;
use thiserror::Error;

/// A linear ramp over a window of global progress.
///
/// `rise` is 0 before `start`, 1 after `end`, linear in between. A window
/// with `end <= start` degenerates to a step at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    pub start: f32,
    pub end: f32,
}

impl Ramp {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn rise(&self, p: f32) -> f32 {
        if self.end <= self.start {
            return if p < self.start { 0.0 } else { 1.0 };
        }
        ((p - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn fall(&self, p: f32) -> f32 {
        1.0 - self.rise(p)
    }
}

/// Timing policy for one scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneTiming {
    /// Opacity entry ramp. `None` marks the base layer, opaque throughout.
    /// Later scenes cover earlier ones by opaque stacking, so no exit ramp
    /// exists.
    pub entry: Option<Ramp>,
    /// Caption fade-in, staggered after the scene entry so the background
    /// settles before the caption appears. `None`: visible from the start.
    pub text_in: Option<Ramp>,
    /// Caption fade-out ahead of the next scene's entry. `None`: the caption
    /// stays up once shown.
    pub text_out: Option<Ramp>,
    /// Background scale at progress 0.
    pub scale_base: f32,
    /// Additional scale gained across the full scroll (continuous zoom, not
    /// reset per scene).
    pub zoom_span: f32,
}

impl SceneTiming {
    pub fn scene_opacity(&self, p: f32) -> f32 {
        match &self.entry {
            None => 1.0,
            Some(ramp) => ramp.rise(p),
        }
    }

    /// Caption opacity: the fade-in and fade-out windows never overlap, so
    /// the min of the two one-sided curves reproduces the piecewise
    /// in/hold/out shape.
    pub fn text_opacity(&self, p: f32) -> f32 {
        let fade_in = self.text_in.as_ref().map_or(1.0, |r| r.rise(p));
        let fade_out = self.text_out.as_ref().map_or(1.0, |r| r.fall(p));
        fade_in.min(fade_out)
    }

    pub fn scale(&self, p: f32) -> f32 {
        self.scale_base + self.zoom_span * p
    }
}

/// Rejected scene timing data. Breakpoints are configuration, so this is the
/// one typed error the core owns; it surfaces at engine construction, never
/// on the frame path.
#[derive(Debug, Error, PartialEq)]
pub enum TimingError {
    #[error("scene {scene}: {which} ramp ends at {end} before it starts at {start}")]
    InvertedRamp {
        scene: usize,
        which: &'static str,
        start: f32,
        end: f32,
    },
    #[error("scene {scene}: {which} ramp [{start}, {end}] leaves the [0, 1] progress range")]
    OutOfRange {
        scene: usize,
        which: &'static str,
        start: f32,
        end: f32,
    },
    #[error("engine requires at least one scene")]
    NoScenes,
}

/// Full engine configuration: filter tuning plus the scene timing table.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub mobile_breakpoint_px: f32,
    pub damping_desktop: f32,
    pub damping_mobile: f32,
    pub snap_epsilon: f32,
    pub slide_max_px: f32,
    pub scenes: Vec<SceneTiming>,
    /// Number of floating decorative elements the host resolved; set by the
    /// adapter after it has queried its targets.
    pub float_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            damping_desktop: DAMPING_DESKTOP,
            damping_mobile: DAMPING_MOBILE,
            snap_epsilon: SNAP_EPSILON,
            slide_max_px: SLIDE_MAX_PX,
            scenes: reference_scenes(),
            float_count: 0,
        }
    }
}

impl EngineConfig {
    pub fn damping(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Desktop => self.damping_desktop,
            Mode::Mobile => self.damping_mobile,
        }
    }

    pub fn validate(&self) -> Result<(), TimingError> {
        if self.scenes.is_empty() {
            return Err(TimingError::NoScenes);
        }
        for (i, timing) in self.scenes.iter().enumerate() {
            check_ramp(i, "entry", timing.entry.as_ref())?;
            check_ramp(i, "text-in", timing.text_in.as_ref())?;
            check_ramp(i, "text-out", timing.text_out.as_ref())?;
        }
        Ok(())
    }
}

fn check_ramp(scene: usize, which: &'static str, ramp: Option<&Ramp>) -> Result<(), TimingError> {
    let Some(r) = ramp else { return Ok(()) };
    if r.end < r.start {
        return Err(TimingError::InvertedRamp {
            scene,
            which,
            start: r.start,
            end: r.end,
        });
    }
    if r.start < 0.0 || r.end > 1.0 {
        return Err(TimingError::OutOfRange {
            scene,
            which,
            start: r.start,
            end: r.end,
        });
    }
    Ok(())
}

/// The reference four-scene timing table.
///
/// Scene 0 is the base layer: opaque from the start, caption gone by a
/// quarter of the scroll. Each later scene enters over a tenth of the
/// scroll, its caption trailing the background by a further tenth. Only
/// scene 1 hands its caption off explicitly before scene 2 covers it.
pub fn reference_scenes() -> Vec<SceneTiming> {
    vec![
        SceneTiming {
            entry: None,
            text_in: None,
            text_out: Some(Ramp::new(0.0, 0.25)),
            scale_base: SCENE_SCALE_BASE,
            zoom_span: 0.0,
        },
        SceneTiming {
            entry: Some(Ramp::new(0.15, 0.25)),
            text_in: Some(Ramp::new(0.35, 0.45)),
            text_out: Some(Ramp::new(0.50, 0.60)),
            scale_base: SCENE_SCALE_BASE,
            zoom_span: SCENE_ZOOM_SPAN,
        },
        SceneTiming {
            entry: Some(Ramp::new(0.50, 0.60)),
            text_in: Some(Ramp::new(0.60, 0.70)),
            text_out: None,
            scale_base: SCENE_SCALE_BASE,
            zoom_span: SCENE_ZOOM_SPAN,
        },
        SceneTiming {
            entry: Some(Ramp::new(0.75, 0.85)),
            text_in: Some(Ramp::new(0.85, 0.95)),
            text_out: None,
            scale_base: SCENE_SCALE_BASE,
            zoom_span: SCENE_ZOOM_SPAN,
        },
    ]
}
