// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state for horizontal mode.

use crate::max_scroll_index;

/// Navigation direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards index 0.
    Previous,
    /// Towards the last item.
    Next,
}

/// Boundary flags for the navigation controls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Boundary {
    /// The active item is the first one.
    pub at_start: bool,
    /// The active item is the last one.
    pub at_end: bool,
}

/// Active and current indices of a horizontal strip.
///
/// The *active* index is the highlighted card and ranges over every item.
/// The *current* index is the scroll anchor; it stops at the last position
/// that still fills the viewport, so near the end of the strip it can lag
/// behind the active index. Both are kept in range by every operation:
///
/// - `active < item_count` (or `0` for an empty strip)
/// - `current <= max(0, item_count - visible)`
///
/// A revision counter increases whenever either index changes, which lets
/// callers skip re-rendering after a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    item_count: usize,
    visible: usize,
    active: usize,
    current: usize,
    revision: u64,
}

impl Cursor {
    /// Creates a cursor positioned at `start`, clamped into range.
    ///
    /// With `rtl`, the cursor starts at the tail instead: both indices are
    /// set to the last scroll position.
    #[must_use]
    pub fn start_at(item_count: usize, visible: usize, start: usize, rtl: bool) -> Self {
        let visible = visible.max(1);
        let max_scroll = max_scroll_index(item_count, visible);
        let active = if rtl {
            max_scroll
        } else {
            start.min(item_count.saturating_sub(1))
        };
        Self {
            item_count,
            visible,
            active,
            current: active.min(max_scroll),
            revision: 0,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of cards that fit in the viewport.
    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Highlighted item.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Scroll anchor.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Largest scroll anchor.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        max_scroll_index(self.item_count, self.visible)
    }

    /// Change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Boundary flags derived from the active index.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary {
            at_start: self.active == 0,
            at_end: self.active + 1 >= self.item_count,
        }
    }

    /// Moves by one step of `step` items.
    ///
    /// Indices are grouped into steps starting at 0. Moving forward goes to
    /// the start of the next step. Moving back from inside a step goes to
    /// that step's start; from a step start it goes to the previous one.
    /// The target is clamped to the items and the scroll anchor follows it.
    ///
    /// Returns `false`, leaving the revision untouched, when nothing moved.
    pub fn advance(&mut self, direction: Direction, step: usize) -> bool {
        let step = step.max(1);
        let last = self.item_count.saturating_sub(1);
        let target = match direction {
            Direction::Next => (self.active / step + 1).saturating_mul(step),
            Direction::Previous if self.active % step != 0 => self.active / step * step,
            Direction::Previous => self.active.saturating_sub(step),
        };
        self.place(target.min(last), target.min(last))
    }

    /// Jumps to `index`.
    ///
    /// The active index and the scroll anchor are clamped independently, so
    /// asking for the last item highlights it while scrolling only as far as
    /// the strip allows.
    pub fn set_index(&mut self, index: usize) -> bool {
        self.place(index, index)
    }

    fn place(&mut self, active: usize, current: usize) -> bool {
        let active = active.min(self.item_count.saturating_sub(1));
        let current = current.min(self.max_scroll());
        if active == self.active && current == self.current {
            return false;
        }
        self.active = active;
        self.current = current;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Boundary, Cursor, Direction};

    #[test]
    fn starts_clamped() {
        let c = Cursor::start_at(6, 4, 10, false);
        assert_eq!(c.active(), 5);
        assert_eq!(c.current(), 2);
        assert_eq!(c.max_scroll(), 2);

        let c = Cursor::start_at(6, 4, 0, true);
        assert_eq!((c.active(), c.current()), (2, 2));

        let c = Cursor::start_at(3, 5, 0, true);
        assert_eq!((c.active(), c.current()), (0, 0));
    }

    #[test]
    fn next_walks_to_the_end_and_stops() {
        let mut c = Cursor::start_at(6, 4, 0, false);
        assert_eq!(
            c.boundary(),
            Boundary {
                at_start: true,
                at_end: false
            }
        );
        for _ in 0..5 {
            assert!(c.advance(Direction::Next, 1));
        }
        assert_eq!(c.active(), 5);
        assert_eq!(c.current(), 2);
        assert!(c.boundary().at_end);

        let revision = c.revision();
        assert!(!c.advance(Direction::Next, 1));
        assert_eq!(c.revision(), revision);
        assert_eq!(c.active(), 5);
    }

    #[test]
    fn steps_snap_to_step_boundaries() {
        let mut c = Cursor::start_at(10, 3, 4, false);
        assert!(c.advance(Direction::Next, 3));
        assert_eq!(c.active(), 6);

        let mut c = Cursor::start_at(10, 3, 4, false);
        assert!(c.advance(Direction::Previous, 3));
        assert_eq!(c.active(), 3);
        assert!(c.advance(Direction::Previous, 3));
        assert_eq!(c.active(), 0);
        assert!(!c.advance(Direction::Previous, 3));

        // The final partial step is clamped to the last item.
        let mut c = Cursor::start_at(10, 3, 7, false);
        assert!(c.advance(Direction::Next, 3));
        assert_eq!(c.active(), 9);
        assert_eq!(c.current(), 7);
    }

    #[test]
    fn set_index_clamps_each_index_separately() {
        let mut c = Cursor::start_at(6, 4, 0, false);
        assert!(c.set_index(5));
        assert_eq!((c.active(), c.current()), (5, 2));
        // Already clamped to the same place.
        assert!(!c.set_index(99));
        assert_eq!((c.active(), c.current()), (5, 2));
        assert!(c.set_index(1));
        assert_eq!((c.active(), c.current()), (1, 1));
    }

    #[test]
    fn empty_strip_is_inert() {
        let mut c = Cursor::start_at(0, 3, 2, false);
        assert_eq!((c.active(), c.current()), (0, 0));
        assert!(!c.advance(Direction::Next, 1));
        assert!(c.boundary().at_start && c.boundary().at_end);
    }
}
