//! Drag-in-progress state fed by the host's gesture recognizer.
//!
//! The recognizer delivers `(translation, velocity, phase)` samples; the
//! tracker only distinguishes "a drag is active" from "idle". `Began`
//! snapshots the position at grab so the live position is always
//! `grab offset + translation`; `Ended` and `Cancelled` both release.

/// Phase of a gesture sample as reported by the host recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Active,
    Ended,
    Cancelled,
}

/// One sample from the host's gesture stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub translation_x: f32,
    pub velocity_x: f32,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn new(translation_x: f32, velocity_x: f32, phase: GesturePhase) -> Self {
        Self {
            translation_x,
            velocity_x,
            phase,
        }
    }
}

/// What a finished drag hands to the swipe decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub translation_x: f32,
    pub velocity_x: f32,
}

/// Tracks the currently active drag, if any.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: bool,
    grab_offset: f32,
    translation_x: f32,
    velocity_x: f32,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a drag with the position the finger grabbed at.
    pub fn begin(&mut self, position: f32) {
        self.active = true;
        self.grab_offset = position;
        self.translation_x = 0.0;
        self.velocity_x = 0.0;
    }

    /// Record a live sample. Velocity is the recognizer's raw value, passed
    /// through unclamped.
    pub fn update(&mut self, translation_x: f32, velocity_x: f32) {
        if self.active {
            self.translation_x = translation_x;
            self.velocity_x = velocity_x;
        }
    }

    /// Position implied by the drag: offset at grab plus live translation.
    #[inline]
    pub fn position(&self) -> f32 {
        self.grab_offset + self.translation_x
    }

    /// End the drag, handing the final translation and velocity over for
    /// the swipe decision. The values stay stored until [`clear_residue`]
    /// so a settle can inspect them.
    ///
    /// [`clear_residue`]: GestureTracker::clear_residue
    pub fn release(&mut self) -> DragRelease {
        self.active = false;
        DragRelease {
            translation_x: self.translation_x,
            velocity_x: self.velocity_x,
        }
    }

    /// Zero the stored translation and velocity so a future drag starts
    /// clean. Called when a transition fully settles.
    pub fn clear_residue(&mut self) {
        self.translation_x = 0.0;
        self.velocity_x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_snapshots_the_grab_offset() {
        let mut tracker = GestureTracker::new();
        tracker.begin(-350.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.position(), -350.0);
        tracker.update(-40.0, -900.0);
        assert_eq!(tracker.position(), -390.0);
    }

    #[test]
    fn release_hands_over_the_last_sample() {
        let mut tracker = GestureTracker::new();
        tracker.begin(0.0);
        tracker.update(-120.0, -1500.0);
        let release = tracker.release();
        assert!(!tracker.is_active());
        assert_eq!(release.translation_x, -120.0);
        assert_eq!(release.velocity_x, -1500.0);
    }

    #[test]
    fn updates_while_idle_are_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.update(-50.0, -100.0);
        assert_eq!(tracker.position(), 0.0);
    }

    #[test]
    fn clear_residue_resets_stored_motion() {
        let mut tracker = GestureTracker::new();
        tracker.begin(0.0);
        tracker.update(-120.0, -1500.0);
        tracker.release();
        tracker.clear_residue();
        let release = tracker.release();
        assert_eq!(release.translation_x, 0.0);
        assert_eq!(release.velocity_x, 0.0);
    }
}
