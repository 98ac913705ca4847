//! First-order low-pass filter over scroll progress.
//!
//! Not a spring: each frame consumes a fixed fraction of the remaining
//! distance, so the value approaches the target monotonically from either
//! side and never overshoots. Decouples the visual update rate from the
//! scroll-event rate.

#[derive(Clone, Copy, Debug)]
pub struct ProgressSmoother {
    current: f32,
    snap_epsilon: f32,
}

impl ProgressSmoother {
    pub fn new(snap_epsilon: f32) -> Self {
        Self {
            current: 0.0,
            snap_epsilon,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance one frame toward `target`. Snaps exactly onto the target once
    /// the remaining distance falls inside the epsilon band, so convergence
    /// terminates instead of decaying forever.
    pub fn step(&mut self, target: f32, damping: f32) -> f32 {
        let diff = target - self.current;
        if diff.abs() > self.snap_epsilon {
            self.current += diff * damping;
        } else {
            self.current = target;
        }
        self.current
    }

    pub fn converged(&self, target: f32) -> bool {
        (target - self.current).abs() <= self.snap_epsilon
    }
}
