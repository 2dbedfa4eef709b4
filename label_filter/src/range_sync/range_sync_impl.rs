// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RangeValue;

/// Staged vs committed value pair for the confidence range slider.
///
/// While the user drags a thumb, every intermediate position goes into
/// [`RangeSync::update_staged`] and stays local. Only [`RangeSync::commit`] (on release)
/// produces a value to push to the external store, so downstream recomputation runs once
/// per gesture instead of once per pixel. Debouncing is structural, there are no timers.
///
/// Methods that may change the committed value return `Some(new_value)` exactly when the
/// caller has to push it outward, and [`None`] otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeSync {
    staged: RangeValue,
    committed: RangeValue,
}

impl RangeSync {
    #[must_use]
    pub fn new(committed: RangeValue) -> Self {
        Self {
            staged: committed,
            committed,
        }
    }

    #[must_use]
    pub fn staged(&self) -> RangeValue { self.staged }

    #[must_use]
    pub fn committed(&self) -> RangeValue { self.committed }

    /// Always allowed, never touches the committed value.
    pub fn update_staged(&mut self, value: RangeValue) { self.staged = value; }

    /// Copies staged to committed. Idempotent: if the committed value already equals the
    /// staged one, nothing is emitted.
    pub fn commit(&mut self) -> Option<RangeValue> {
        if self.committed == self.staged {
            return None;
        }
        self.committed = self.staged;
        Some(self.committed)
    }

    /// Sets both staged and committed to [`RangeValue::FULL`].
    pub fn reset(&mut self) -> Option<RangeValue> {
        self.staged = RangeValue::FULL;
        if self.committed == RangeValue::FULL {
            return None;
        }
        self.committed = RangeValue::FULL;
        Some(self.committed)
    }

    /// Inbound reconciliation: the external store changed the committed value (eg:
    /// another widget reset it). Staged is reset to match. Never emits.
    pub fn sync_committed(&mut self, external: RangeValue) {
        self.committed = external;
        self.staged = external;
    }

    /// `true` while a drag has moved the staged value away from the committed one.
    #[must_use]
    pub fn is_dirty(&self) -> bool { self.staged != self.committed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn range(low: f64, high: f64) -> RangeValue { RangeValue::try_new(low, high).unwrap() }

    #[test]
    fn drag_stays_staged_until_commit() {
        let mut it = RangeSync::default();
        let mut pushed: Vec<RangeValue> = vec![];

        for (low, high) in [(0.2, 0.5), (0.3, 0.6), (0.4, 0.7)] {
            it.update_staged(range(low, high));
            assert_eq2!(it.committed(), RangeValue::FULL);
        }
        pushed.extend(it.commit());

        assert_eq2!(it.committed(), range(0.4, 0.7));
        assert_eq2!(pushed, vec![range(0.4, 0.7)]);
    }

    #[test]
    fn commit_twice_emits_once() {
        let mut it = RangeSync::default();
        it.update_staged(range(0.1, 0.9));
        assert_eq2!(it.commit(), Some(range(0.1, 0.9)));
        assert_eq2!(it.commit(), None);
    }

    #[test]
    fn commit_without_drag_emits_nothing() {
        let mut it = RangeSync::new(range(0.3, 0.4));
        assert_eq2!(it.commit(), None);
    }

    #[test]
    fn reset_emits_only_when_committed_changes() {
        let mut it = RangeSync::default();
        it.update_staged(range(0.2, 0.3));
        assert_eq2!(it.reset(), None);
        assert_eq2!(it.staged(), RangeValue::FULL);

        it.update_staged(range(0.2, 0.3));
        _ = it.commit();
        assert_eq2!(it.reset(), Some(RangeValue::FULL));
        assert!(!it.is_dirty());
    }

    #[test]
    fn external_change_resets_staged() {
        let mut it = RangeSync::default();
        it.update_staged(range(0.2, 0.3));
        assert!(it.is_dirty());
        it.sync_committed(range(0.5, 0.6));
        assert_eq2!(it.staged(), range(0.5, 0.6));
        assert_eq2!(it.committed(), range(0.5, 0.6));
        assert_eq2!(it.commit(), None);
    }
}
