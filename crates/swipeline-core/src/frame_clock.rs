//! Host-pumped frame clock.
//!
//! The host invokes the engine once per display frame with a monotonic
//! timestamp in nanoseconds, but only while the clock reports itself as
//! running; when idle there is no per-frame cost. The first tick after a
//! start establishes the time base and yields no delta, so an animation
//! begun mid-frame never integrates phantom elapsed time.

/// Start/stop clock that converts host frame timestamps into step deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    running: bool,
    last_tick_nanos: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the clock. A no-op if it is already running: the existing time
    /// base is preserved so retargeting an in-flight animation does not
    /// reset its kinematics.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_tick_nanos = None;
        }
    }

    /// Stop the clock and discard its time base.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick_nanos = None;
    }

    /// Advance the clock to `now_nanos`.
    ///
    /// Returns the elapsed time in seconds since the previous tick, or
    /// `None` when the clock is stopped or this tick merely establishes the
    /// time base. Non-monotonic timestamps yield a zero delta rather than
    /// going backwards.
    pub fn tick(&mut self, now_nanos: u64) -> Option<f32> {
        if !self.running {
            return None;
        }
        match self.last_tick_nanos.replace(now_nanos) {
            None => None,
            Some(last) => {
                let elapsed = now_nanos.saturating_sub(last);
                Some(elapsed as f32 / 1_000_000_000.0)
            }
        }
    }
}
