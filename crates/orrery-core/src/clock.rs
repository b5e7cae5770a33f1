//! Pausable simulation clock.
//!
//! Accumulates simulated time from per-frame deltas. The caller simply stops
//! advancing the clock while paused, so resuming continues exactly where the
//! pause left off with no catch-up jump and no drift correction.

/// Monotonic simulated-time accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimClock {
    elapsed: f64,
}

impl SimClock {
    /// Creates a clock at t = 0.
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advances simulated time by `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Current simulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
