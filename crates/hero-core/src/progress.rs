//! Input sampling: raw scroll geometry to a clamped target progress.

use crate::constants::MOBILE_BREAKPOINT_PX;
use glam::Vec2;

/// Layout mode, recomputed on every resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Desktop,
    Mobile,
}

impl Mode {
    pub fn for_viewport(size: Vec2) -> Self {
        if size.x <= MOBILE_BREAKPOINT_PX {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }
}

/// Geometry of the tall scroll container relative to the viewport, read by
/// the host on each scroll or resize event.
#[derive(Clone, Copy, Debug)]
pub struct ScrollGeometry {
    /// Top edge of the container in viewport coordinates; negative once the
    /// user has scrolled past it.
    pub container_top: f32,
    pub container_height: f32,
    pub viewport_height: f32,
}

impl ScrollGeometry {
    /// Scrolled distance within the container over the total scrollable
    /// distance, clamped to [0, 1].
    ///
    /// A container no taller than the viewport leaves nothing to scroll
    /// through and the division would be degenerate, so the result is pinned:
    /// 0 while the container top sits at or below the viewport origin, 1 once
    /// it has passed above it. Never NaN or infinite.
    pub fn progress(&self) -> f32 {
        let total = self.container_height - self.viewport_height;
        if total <= 0.0 {
            return if self.container_top < 0.0 { 1.0 } else { 0.0 };
        }
        let raw = -self.container_top / total;
        if !raw.is_finite() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }
}
