use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Weight of the newest pointer sample in the moving average.
pub const SMOOTHING_FACTOR: f64 = 0.12;

/// Exponential moving average over the pointer's horizontal position.
///
/// Each tick moves `smoothed_x` a fixed fraction of the way to `raw_x`. The
/// update is a convex combination, so the value never overshoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    raw_x: f64,
    smoothed_x: f64,
    factor: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PointerTracker {
    pub fn new(initial_x: f64) -> Self {
        Self::with_factor(initial_x, SMOOTHING_FACTOR)
    }

    pub fn with_factor(initial_x: f64, factor: f64) -> Self {
        Self {
            raw_x: initial_x,
            smoothed_x: initial_x,
            factor: factor.clamp(f64::EPSILON, 1.0),
        }
    }

    pub fn set_raw(&mut self, x: f64) {
        if x.is_finite() {
            self.raw_x = x;
        }
    }

    pub fn raw_x(&self) -> f64 {
        self.raw_x
    }

    pub fn smoothed_x(&self) -> f64 {
        self.smoothed_x
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Remaining gap between the tracked and the raw position.
    pub fn lag(&self) -> f64 {
        (self.raw_x - self.smoothed_x).abs()
    }

    pub fn tick(&mut self) -> f64 {
        self.smoothed_x += (self.raw_x - self.smoothed_x) * self.factor;
        self.smoothed_x
    }
}

/// Shared stop flag for a [`SmoothingLoop`].
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Per-frame smoothing task owned by a view.
///
/// Iterating yields one smoothed value per tick until the loop is cancelled,
/// either through a [`CancelHandle`] or by dropping the loop. A cancelled loop
/// can be restarted and resumes from its last position.
#[derive(Debug, Default)]
pub struct SmoothingLoop {
    tracker: PointerTracker,
    cancel: CancelHandle,
}

impl SmoothingLoop {
    pub fn start(tracker: PointerTracker) -> Self {
        Self {
            tracker,
            cancel: CancelHandle::default(),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Resumes a cancelled loop with a fresh handle; old handles no longer affect it.
    pub fn restart(&mut self) -> CancelHandle {
        self.cancel = CancelHandle::default();
        self.cancel.clone()
    }

    pub fn set_raw(&mut self, x: f64) {
        self.tracker.set_raw(x);
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }
}

impl Iterator for SmoothingLoop {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.cancel.is_cancelled() {
            return None;
        }
        Some(self.tracker.tick())
    }
}

impl Drop for SmoothingLoop {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
