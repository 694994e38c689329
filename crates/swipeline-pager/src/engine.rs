//! The paging engine: a dataflow graph evaluated once per display frame.
//!
//! The engine computes one continuous horizontal offset from three
//! competing signals: the externally committed index, live drag deltas,
//! and an in-flight spring settle. Per frame, in order: external changes
//! are reconciled, queued gesture samples are applied, the spring
//! integrates one step, and deferred index commits are drained. Only after
//! all of that do collaborators read the frame's offset/progress.
//!
//! Reentrancy rules the ordering encodes:
//! - an external index change never fights an in-progress drag (it is
//!   dropped while a user-initiated transition is in flight);
//! - a new touch cancels an in-flight spring at any point, and the
//!   abandoned settle commits nothing;
//! - a settle commits its index exactly once, via the effect queue.

use smallvec::SmallVec;

use swipeline_animation::{Spring, SpringSpec};
use swipeline_core::{Cell, Effects, FrameClock};

use crate::gesture::{GesturePhase, GestureSample, GestureTracker};
use crate::route::{Layout, NavigationState, Route};
use crate::swipe::decide_target;

/// What the rendering collaborator consumes each frame: the clamped
/// horizontal translation for the page strip, and whether the
/// gesture-detection region should accept touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderProps {
    pub translate_x: f32,
    pub gesture_enabled: bool,
}

/// A settled transition waiting to be announced to the host.
struct IndexCommit {
    index: usize,
    key: String,
}

/// Swipeable paging engine. One instance per paging view; all state is
/// exclusively owned and mutated by the per-frame evaluation.
pub struct PagerEngine {
    on_index_committed: Box<dyn FnMut(&str)>,
    routes: Vec<Route>,

    // Externally written signals, reconciled at the top of each frame.
    committed_index: Cell<usize>,
    route_count: Cell<usize>,
    layout_width: Cell<f32>,
    swipe_enabled: bool,

    // Working state of the transition machine.
    internal_index: usize,
    offset: f32,
    spring: Spring,
    tracker: GestureTracker,
    clock: FrameClock,
    pending_samples: SmallVec<[GestureSample; 4]>,
    effects: Effects<IndexCommit>,
    /// True from the moment a drag starts until the resulting transition
    /// fully settles; suppresses external-index reactions meanwhile.
    user_initiated: bool,
}

impl PagerEngine {
    pub fn new(
        navigation_state: NavigationState,
        layout: Layout,
        on_index_committed: impl FnMut(&str) + 'static,
    ) -> Self {
        let route_count = navigation_state.routes.len();
        let last = route_count.saturating_sub(1);
        let index = navigation_state.index.min(last);
        let width = layout.width.max(0.0);
        let offset = -(index as f32) * width;
        Self {
            on_index_committed: Box::new(on_index_committed),
            routes: navigation_state.routes,
            committed_index: Cell::new(index),
            route_count: Cell::new(route_count),
            layout_width: Cell::new(width),
            swipe_enabled: true,
            internal_index: index,
            offset,
            spring: Spring::new(SpringSpec::pager(), offset),
            tracker: GestureTracker::new(),
            clock: FrameClock::new(),
            pending_samples: SmallVec::new(),
            effects: Effects::new(),
            user_initiated: false,
        }
    }

    /// Supply the host's navigation state for this render. Reconciliation
    /// with any in-flight gesture happens on the next frame.
    pub fn set_navigation_state(&mut self, navigation_state: NavigationState) {
        self.routes = navigation_state.routes;
        self.route_count.set(self.routes.len());
        self.committed_index.set(navigation_state.index);
    }

    /// Supply the measured viewport. A zero width disables gestures until a
    /// real layout arrives.
    pub fn set_layout(&mut self, layout: Layout) {
        if layout.width < 0.0 {
            log::warn!("ignoring negative layout width {}", layout.width);
            return;
        }
        self.layout_width.set(layout.width);
    }

    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    /// Queue a sample from the host's gesture recognizer. Samples are
    /// applied at the start of the next frame, before spring integration.
    pub fn handle_gesture(&mut self, sample: GestureSample) {
        self.pending_samples.push(sample);
    }

    /// Whether the host's display scheduler should tick [`frame`] again.
    /// False means the engine is quiescent and has no per-frame cost.
    ///
    /// [`frame`]: PagerEngine::frame
    pub fn wants_frame(&self) -> bool {
        self.clock.is_running()
            || self.tracker.is_active()
            || !self.pending_samples.is_empty()
            || !self.effects.is_empty()
            || self.committed_index.has_change()
            || self.route_count.has_change()
            || self.layout_width.has_change()
    }

    /// Evaluate one frame at the host-supplied monotonic timestamp.
    pub fn frame(&mut self, now_nanos: u64) {
        self.sync_external_changes();
        self.apply_gesture_samples();

        if self.tracker.is_active() {
            self.offset = self.clamp_offset(self.tracker.position());
        } else if self.clock.is_running() {
            let settled = self.spring.tick(&mut self.clock, now_nanos);
            self.offset = self.clamp_offset(self.spring.position());
            if settled {
                self.settle();
            }
        }

        // Commits run strictly after every value for this frame is final.
        for commit in self.effects.take() {
            log::trace!("committing index {} ({})", commit.index, commit.key);
            (self.on_index_committed)(&commit.key);
        }
    }

    /// Fractional progress across pages: `|offset| / width`, in
    /// `[0, route_count - 1]`.
    pub fn position(&self) -> f32 {
        let width = self.layout_width.get();
        if width <= 0.0 {
            return self.internal_index as f32;
        }
        -self.translate_x() / width
    }

    /// Horizontal translation for the page strip, clamped to the strip's
    /// valid travel range.
    pub fn translate_x(&self) -> f32 {
        self.clamp_offset(self.offset)
    }

    /// Raw horizontal offset in layout-width units. Always within
    /// `[-(route_count - 1) * width, 0]`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn render_props(&self) -> RenderProps {
        RenderProps {
            translate_x: self.translate_x(),
            gesture_enabled: self.swipe_enabled && self.layout_width.get() > 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    /// Reconcile externally written signals with the transition machine.
    fn sync_external_changes(&mut self) {
        if let Some(change) = self.committed_index.take_change() {
            if self.user_initiated {
                // A drag or settle is in flight; the external value must
                // not override the user's gesture.
                log::trace!("dropping external index {} during user transition", change.to);
            } else {
                self.cut_to_index(change.to);
            }
        }

        if let Some(change) = self.route_count.take_change() {
            let last = change.to.saturating_sub(1);
            if self.internal_index > last {
                self.internal_index = last;
                let target = -(last as f32) * self.layout_width.get();
                if self.clock.is_running() {
                    self.spring.set_target(target);
                } else if !self.tracker.is_active() {
                    self.offset = target;
                }
            }
        }

        if let Some(change) = self.layout_width.take_change() {
            if self.tracker.is_active() {
                // The live drag keeps its grab-relative offset; release
                // thresholds pick up the new width naturally.
            } else if self.clock.is_running() && change.from > 0.0 && change.to > 0.0 {
                self.spring.rescale(change.to / change.from);
                self.offset = self.clamp_offset(self.spring.position());
            } else {
                // Idle: re-derive the offset for the new scale with no
                // animation and no commit.
                self.offset = -(self.internal_index as f32) * change.to;
            }
        }
    }

    fn apply_gesture_samples(&mut self) {
        let samples = std::mem::take(&mut self.pending_samples);
        for sample in samples {
            match sample.phase {
                GesturePhase::Began => self.begin_drag(),
                GesturePhase::Active => {
                    if self.tracker.is_active() {
                        self.tracker.update(sample.translation_x, sample.velocity_x);
                        self.offset = self.clamp_offset(self.tracker.position());
                    }
                }
                GesturePhase::Ended | GesturePhase::Cancelled => self.release_drag(),
            }
        }
    }

    fn begin_drag(&mut self) {
        if self.tracker.is_active() {
            return;
        }
        if !self.swipe_enabled || self.layout_width.get() <= 0.0 {
            return;
        }
        // Abandon any in-flight settle. It never reaches "settled", so no
        // commit is issued for it.
        self.clock.stop();
        self.tracker.begin(self.offset);
        self.user_initiated = true;
        log::trace!("drag began at offset {}", self.offset);
    }

    fn release_drag(&mut self) {
        if !self.tracker.is_active() {
            return;
        }
        let release = self.tracker.release();
        let width = self.layout_width.get();
        let target_index = decide_target(
            release,
            self.internal_index,
            self.route_count.get(),
            width,
        );
        log::trace!(
            "drag released: translation {} velocity {} -> index {}",
            release.translation_x,
            release.velocity_x,
            target_index
        );
        // The decided index is the tentative internal index immediately, so
        // a rapid re-swipe composes from it rather than the settled one.
        self.internal_index = target_index;
        self.spring.seed(self.offset, release.velocity_x);
        self.spring.set_target(-(target_index as f32) * width);
        self.clock.start();
    }

    /// The spring reached rest: snap onto the page, clear gesture residue,
    /// and queue the one externally observable commit for this transition.
    fn settle(&mut self) {
        self.clock.stop();
        let width = self.layout_width.get();
        let last = self.route_count.get().saturating_sub(1);
        let index = if width > 0.0 {
            ((-self.offset / width).round() as i64).clamp(0, last as i64) as usize
        } else {
            self.internal_index.min(last)
        };
        self.internal_index = index;
        self.tracker.clear_residue();
        self.user_initiated = false;
        // Record our own commit without signalling a change, so the host
        // echoing the same index back does not re-trigger a transition.
        self.committed_index.commit(index);
        if let Some(route) = self.routes.get(index) {
            self.effects.push(IndexCommit {
                index,
                key: route.key.clone(),
            });
        }
    }

    /// Instant cut to an externally supplied index: no animation, no
    /// commit. Out-of-range values clamp, since external updates may race a
    /// page-set mutation.
    fn cut_to_index(&mut self, index: usize) {
        let last = self.route_count.get().saturating_sub(1);
        if index > last {
            log::warn!("external index {} out of range, clamping to {}", index, last);
        }
        let index = index.min(last);
        self.clock.stop();
        self.internal_index = index;
        self.offset = -(index as f32) * self.layout_width.get();
        self.spring.seed(self.offset, 0.0);
        self.spring.set_target(self.offset);
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let last = self.route_count.get().saturating_sub(1) as f32;
        let width = self.layout_width.get();
        offset.clamp(-(last * width), 0.0)
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
