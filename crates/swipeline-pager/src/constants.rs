//! Shared gesture thresholds for the pager.
//!
//! These values are in logical pixels. The distance threshold scales with
//! the page width; the velocity threshold is absolute so a quick flick
//! changes page regardless of how far the finger travelled.

/// Minimum release speed, in logical pixels per second, for a drag to count
/// as a swipe when it did not travel the distance threshold.
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 1200.0;

/// The distance threshold is `page width / SWIPE_DISTANCE_DIVISOR`: a drag
/// must cover a bit more than half the page before distance alone commits
/// a page change.
pub const SWIPE_DISTANCE_DIVISOR: f32 = 1.75;
