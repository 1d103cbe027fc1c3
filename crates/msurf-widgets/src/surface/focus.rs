//! Focus bookkeeping for an open surface.
//!
//! # Invariants
//!
//! 1. The focusable count is captured once per open and stays fixed until
//!    close; items added or removed while open are not seen.
//! 2. Navigation results are always in `0..len`; an empty snapshot never
//!    yields an index.
//! 3. `saved` is set when the adapter saved the previous focus and cleared
//!    when it is restored, so one open restores at most once.

/// Cached focusable-element snapshot plus the saved-focus flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusTracker {
    len: usize,
    saved: bool,
}

impl FocusTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            len: 0,
            saved: false,
        }
    }

    /// Record the snapshot size taken at open time.
    pub fn capture(&mut self, len: usize) {
        self.len = len;
    }

    /// Number of items in the snapshot.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `index` addresses an item in the snapshot.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Step from `current` by one item, wrapping at both ends.
    ///
    /// With no current item, forward lands on the first item and reverse on
    /// the last. An out-of-range `current` is treated as no current item.
    #[must_use]
    pub fn step(&self, current: Option<usize>, reverse: bool) -> Option<usize> {
        let last = self.last()?;
        let next = match current.filter(|&i| i <= last) {
            None if reverse => last,
            None => 0,
            Some(0) if reverse => last,
            Some(i) if reverse => i - 1,
            Some(i) if i == last => 0,
            Some(i) => i + 1,
        };
        Some(next)
    }

    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    /// Clear and return the saved flag.
    pub fn take_saved(&mut self) -> bool {
        core::mem::take(&mut self.saved)
    }

    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    /// Drop the snapshot (the saved flag is kept).
    pub fn clear_snapshot(&mut self) {
        self.len = 0;
    }
}
