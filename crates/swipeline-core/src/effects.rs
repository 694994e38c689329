//! Batched side-effect queue.
//!
//! Callouts to the host (index commits) are never issued from inside the
//! numeric evaluation pass: they are pushed here while the graph is being
//! evaluated and drained once at the end of the frame, after every cell
//! value is final. Tests can evaluate N frames and then inspect what was
//! queued instead of mocking callbacks.

use smallvec::SmallVec;

/// FIFO queue of deferred effects. Almost always holds zero or one entry,
/// so it is backed by an inline small vector.
#[derive(Debug)]
pub struct Effects<T> {
    queued: SmallVec<[T; 2]>,
}

impl<T> Effects<T> {
    pub fn new() -> Self {
        Self {
            queued: SmallVec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, effect: T) {
        self.queued.push(effect);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Remove and return everything queued so far, in push order.
    pub fn take(&mut self) -> SmallVec<[T; 2]> {
        std::mem::take(&mut self.queued)
    }
}

impl<T> Default for Effects<T> {
    fn default() -> Self {
        Self::new()
    }
}
