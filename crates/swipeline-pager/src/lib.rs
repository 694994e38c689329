//! Swipeable paging engine behind a tabbed view.
//!
//! Given an ordered set of routes and an externally owned current index,
//! the engine renders pages edge-to-edge and lets the user drag
//! horizontally between adjacent pages, settling onto the nearest page
//! with spring physics while staying synchronized with index changes that
//! originate outside the gesture (e.g. tapping a tab button).
//!
//! The engine is frame-driven and single-threaded: the host feeds it
//! gesture samples and ticks [`PagerEngine::frame`] once per display frame
//! while [`PagerEngine::wants_frame`] is true, then reads
//! [`PagerEngine::position`] / [`PagerEngine::render_props`]. The sole
//! externally observable commit point is the callback handed to
//! [`PagerEngine::new`], invoked exactly once per settled transition with
//! the route key of the final committed index.

pub mod constants;
mod engine;
mod gesture;
mod route;
mod swipe;

pub use engine::{PagerEngine, RenderProps};
pub use gesture::{DragRelease, GesturePhase, GestureSample, GestureTracker};
pub use route::{Layout, NavigationState, Route};
pub use swipe::decide_target;
