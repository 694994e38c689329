//! Animation system for Swipeline.
//!
//! Provides the damped harmonic spring that settles the pager onto a page
//! after a drag releases. Time is supplied by the host through
//! [`swipeline_core::FrameClock`]; this crate only integrates deltas.

mod spring;

pub use spring::{Spring, SpringSpec};
