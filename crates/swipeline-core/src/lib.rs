//! Core runtime primitives for the Swipeline paging engine.
//!
//! Swipeline evaluates a small dataflow graph once per display frame. This
//! crate provides the three pieces that graph is built from:
//!
//! - [`Cell`]: a value slot that remembers what the evaluator last observed,
//!   so "changed since last tick" is a simple previous-value comparison.
//! - [`FrameClock`]: a start/stop clock fed host-supplied frame timestamps;
//!   the host's display scheduler only ticks the engine while it runs.
//! - [`Effects`]: a queue of deferred side effects, drained exactly once per
//!   frame after all cell values for that frame are finalized.
//!
//! Everything here is single-threaded by design: the host serializes the
//! gesture stream and the per-frame tick onto one UI thread.

mod cell;
mod effects;
mod frame_clock;

pub use cell::{Cell, Change};
pub use effects::Effects;
pub use frame_clock::FrameClock;
