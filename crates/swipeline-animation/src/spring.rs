//! Damped harmonic spring integrator.
//!
//! The spring is pure kinematics: position, velocity, and a destination.
//! Whether it is "animating" is owned by the caller's [`FrameClock`]; the
//! caller seeds the spring at a drag release, starts the clock, and ticks
//! it every frame until [`Spring::step`] reports the system settled.

use swipeline_core::FrameClock;

/// Upper bound on a single integration sub-step. Frame deltas larger than
/// this are split so the semi-implicit Euler scheme stays stable after a
/// dropped frame.
const MAX_STEP_SECONDS: f64 = 0.016;

/// Physical parameters of the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping: f32,
    pub mass: f32,
    pub stiffness: f32,
    /// When true the position may never cross the destination and rebound;
    /// it is clamped to the destination side it started from.
    pub overshoot_clamping: bool,
    /// Residual speed under which the spring counts as resting.
    pub rest_speed_threshold: f32,
    /// Residual displacement under which the spring counts as resting.
    pub rest_displacement_threshold: f32,
}

impl SpringSpec {
    /// Tuning used by the pager settle animation: overdamped, no rebound.
    pub fn pager() -> Self {
        Self {
            damping: 35.0,
            mass: 2.0,
            stiffness: 100.0,
            overshoot_clamping: true,
            rest_speed_threshold: 0.001,
            rest_displacement_threshold: 0.001,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::pager()
    }
}

/// Spring state integrated one frame at a time.
///
/// Kinematics are kept in f64: the rest thresholds are 0.001 while page
/// offsets run into the hundreds, and at f32 resolution the per-frame
/// position increment near the end of a settle drops below half an ulp of
/// the offset, freezing the position short of the displacement threshold
/// with the velocity pinned above the speed threshold. The public API
/// stays f32, matching the layout units the engine works in.
#[derive(Debug, Clone)]
pub struct Spring {
    spec: SpringSpec,
    position: f64,
    velocity: f64,
    target: f64,
    /// Position at the moment the current destination was set; determines
    /// which side of the destination counts as overshoot.
    start_position: f64,
}

impl Spring {
    pub fn new(spec: SpringSpec, position: f32) -> Self {
        let position = f64::from(position);
        Self {
            spec,
            position,
            velocity: 0.0,
            target: position,
            start_position: position,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position as f32
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity as f32
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target as f32
    }

    /// Overwrite the kinematic state, typically with the position and
    /// velocity a drag handed over at release.
    pub fn seed(&mut self, position: f32, velocity: f32) {
        self.position = f64::from(position);
        self.velocity = f64::from(velocity);
    }

    /// Set the destination. Position and velocity are left untouched, so a
    /// retarget mid-flight continues from the current kinematic state.
    pub fn set_target(&mut self, target: f32) {
        self.target = f64::from(target);
        self.start_position = self.position;
    }

    /// Rescale position, velocity, and destination by `factor`. Used when
    /// the layout the spring animates in changes size mid-flight.
    pub fn rescale(&mut self, factor: f32) {
        let factor = f64::from(factor);
        self.position *= factor;
        self.velocity *= factor;
        self.target *= factor;
        self.start_position *= factor;
    }

    /// Advance the spring using the clock's delta for `now_nanos`.
    ///
    /// Returns `true` when the spring settled this frame. Yields `false`
    /// without integrating when the clock is stopped or this tick only
    /// establishes the time base.
    pub fn tick(&mut self, clock: &mut FrameClock, now_nanos: u64) -> bool {
        match clock.tick(now_nanos) {
            Some(dt) => self.step(dt),
            None => false,
        }
    }

    /// Integrate `dt` seconds and report whether the spring settled.
    ///
    /// Settling snaps the position exactly onto the destination and zeroes
    /// the velocity.
    pub fn step(&mut self, dt: f32) -> bool {
        let stiffness = f64::from(self.spec.stiffness);
        let damping = f64::from(self.spec.damping);
        let mass = f64::from(self.spec.mass);

        let mut remaining = f64::from(dt);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECONDS);
            let displacement = self.position - self.target;
            let acceleration =
                (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        let overshot = self.spec.overshoot_clamping && self.clamp_overshoot();
        let at_rest = self.velocity.abs() < f64::from(self.spec.rest_speed_threshold);
        let near_target = (self.position - self.target).abs()
            < f64::from(self.spec.rest_displacement_threshold);

        if overshot || (at_rest && near_target) {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    /// Clamp the position onto the destination if it crossed over from the
    /// side the transition started on. Returns whether a crossing occurred.
    fn clamp_overshoot(&mut self) -> bool {
        let crossed = if self.start_position < self.target {
            self.position > self.target
        } else if self.start_position > self.target {
            self.position < self.target
        } else {
            false
        };
        if crossed {
            self.position = self.target;
        }
        crossed
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
