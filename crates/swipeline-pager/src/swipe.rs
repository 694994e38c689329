//! Swipe decision: which page a released drag lands on.

use crate::constants::{SWIPE_DISTANCE_DIVISOR, SWIPE_VELOCITY_THRESHOLD};
use crate::gesture::DragRelease;

/// Decide the next page index for a drag released with the given
/// translation and velocity.
///
/// A release qualifies as a swipe when either the travelled distance
/// reaches `width / 1.75` or the speed reaches 1200 px/s; otherwise the
/// pager snaps back to `current_index`. Distance is authoritative over
/// velocity for the direction when both qualify. Dragging right (positive
/// translation) moves toward a lower index because the position grows more
/// negative with increasing index.
pub fn decide_target(
    release: DragRelease,
    current_index: usize,
    route_count: usize,
    width: f32,
) -> usize {
    let last = route_count.saturating_sub(1);
    let current = current_index.min(last);
    if width <= 0.0 {
        return current;
    }

    let distance_threshold = width / SWIPE_DISTANCE_DIVISOR;
    let distance = release.translation_x.abs();
    let speed = release.velocity_x.abs();

    let driver = if distance >= distance_threshold {
        release.translation_x
    } else if speed >= SWIPE_VELOCITY_THRESHOLD {
        release.velocity_x
    } else {
        return current;
    };

    // The qualifying branches guarantee a nonzero magnitude in practice,
    // but exact-threshold equality with zero must not produce an undefined
    // direction: treat it as "no swipe".
    if driver == 0.0 {
        return current;
    }

    let direction: i64 = if driver > 0.0 { 1 } else { -1 };
    let candidate = current as i64 - direction;
    candidate.clamp(0, last as i64) as usize
}
