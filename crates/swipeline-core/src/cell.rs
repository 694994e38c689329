//! Signal cells with changed-since-last-tick detection.
//!
//! External collaborators may rewrite a cell any number of times between
//! frames; the evaluator only cares whether the value it sees this tick
//! differs from the value it saw last tick. A cell therefore stores the
//! current value plus the last value the evaluator consumed, and
//! [`Cell::take_change`] compares the two.

/// A transition observed by the frame evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change<T> {
    /// Value the evaluator saw on the previous tick.
    pub from: T,
    /// Value the evaluator sees now.
    pub to: T,
}

/// A single-owner value slot with per-tick change detection.
///
/// Writes via [`set`](Cell::set) are visible to the next
/// [`take_change`](Cell::take_change); writes via
/// [`commit`](Cell::commit) are not, which is how the engine records its
/// own index commits without re-triggering itself on the following frame.
#[derive(Debug, Clone)]
pub struct Cell<T: Copy + PartialEq> {
    current: T,
    seen: T,
}

impl<T: Copy + PartialEq> Cell<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            seen: value,
        }
    }

    /// Current value, regardless of whether it has been observed yet.
    #[inline]
    pub fn get(&self) -> T {
        self.current
    }

    /// Write a value that the evaluator should react to.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    /// Write a value without signalling a change.
    #[inline]
    pub fn commit(&mut self, value: T) {
        self.current = value;
        self.seen = value;
    }

    /// Whether a change is pending without consuming it. Used by "does the
    /// graph need another evaluation" predicates.
    #[inline]
    pub fn has_change(&self) -> bool {
        self.current != self.seen
    }

    /// Consume the pending change, if any.
    ///
    /// Returns `Some` only when the current value differs from the value
    /// returned by the previous call; repeated writes of an identical value
    /// never report a change.
    pub fn take_change(&mut self) -> Option<Change<T>> {
        if self.current == self.seen {
            return None;
        }
        let change = Change {
            from: self.seen,
            to: self.current,
        };
        self.seen = self.current;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_change_on_fresh_cell() {
        let mut cell = Cell::new(3usize);
        assert_eq!(cell.take_change(), None);
    }

    #[test]
    fn set_reports_change_once() {
        let mut cell = Cell::new(0usize);
        cell.set(2);
        assert_eq!(cell.take_change(), Some(Change { from: 0, to: 2 }));
        assert_eq!(cell.take_change(), None);
    }

    #[test]
    fn rewriting_the_same_value_is_silent() {
        let mut cell = Cell::new(1usize);
        cell.set(1);
        assert_eq!(cell.take_change(), None);
    }

    #[test]
    fn intermediate_writes_collapse_into_one_change() {
        let mut cell = Cell::new(0usize);
        cell.set(1);
        cell.set(2);
        assert_eq!(cell.take_change(), Some(Change { from: 0, to: 2 }));
    }

    #[test]
    fn writes_that_return_to_the_seen_value_cancel_out() {
        let mut cell = Cell::new(0usize);
        cell.set(5);
        cell.set(0);
        assert_eq!(cell.take_change(), None);
    }

    #[test]
    fn has_change_is_non_consuming() {
        let mut cell = Cell::new(0usize);
        assert!(!cell.has_change());
        cell.set(1);
        assert!(cell.has_change());
        assert!(cell.has_change());
        cell.take_change();
        assert!(!cell.has_change());
    }

    #[test]
    fn commit_does_not_signal() {
        let mut cell = Cell::new(0usize);
        cell.commit(4);
        assert_eq!(cell.get(), 4);
        assert_eq!(cell.take_change(), None);
        // A later external write of the committed value stays silent too.
        cell.set(4);
        assert_eq!(cell.take_change(), None);
    }
}
