// Engine tuning constants backing the reference scene configuration.

/// Viewport width at or below which the engine runs in mobile mode.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// First-order smoothing filter: fraction of the remaining distance to the
// target consumed per frame. Mobile snaps harder for responsiveness.
pub const DAMPING_DESKTOP: f32 = 0.08;
pub const DAMPING_MOBILE: f32 = 0.2;

// Below this remaining distance the smoother snaps to the target.
pub const SNAP_EPSILON: f32 = 1e-4;

// Captions rest after sliding up: offset = SLIDE_MAX_PX * (1 - text_opacity).
pub const SLIDE_MAX_PX: f32 = 20.0;

// Floating decorative elements.
pub const FLOAT_LIFT_PX: f32 = 200.0; // total upward drift across the scroll
pub const FLOAT_PARALLAX_UNIT_PX: f32 = 50.0; // per-element depth offset
pub const FLOAT_TURN_DEG: f32 = 360.0; // one full rotation across the scroll
pub const FLOAT_FADE_IN_RATE: f32 = 5.0; // fully visible by progress 0.2

// Background zoom: scale = SCENE_SCALE_BASE + SCENE_ZOOM_SPAN * progress.
pub const SCENE_SCALE_BASE: f32 = 1.1;
pub const SCENE_ZOOM_SPAN: f32 = 0.05;

// Gallery image parallax (desktop only).
pub const GALLERY_SPEED_BASE: f32 = 0.025;
pub const GALLERY_SPEED_STEP: f32 = 0.005;
pub const GALLERY_SPEED_CYCLE: usize = 5;
pub const GALLERY_SCALE: f32 = 1.15;
