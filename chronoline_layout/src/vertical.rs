// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side placement and progressive reveal for vertical mode.

use alloc::vec::Vec;

use chronoline_settings::{Side, VerticalStart};

/// Side of the centre line an item is drawn on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Left of the line.
    Left,
    /// Right of the line.
    Right,
}

impl Placement {
    /// Item class for this placement.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline__item--left",
            Self::Right => "timeline__item--right",
        }
    }
}

/// Placement of item `index`.
///
/// On narrow ("mobile") viewports every item is on the left. With a
/// same-side resolution every item takes that side. Otherwise items
/// alternate, beginning on the `start` side.
#[must_use]
pub fn placement(index: usize, same_side: Option<Side>, start: VerticalStart, mobile: bool) -> Placement {
    if mobile {
        return Placement::Left;
    }
    match same_side {
        Some(Side::Left | Side::Top) => Placement::Left,
        Some(Side::Right | Side::Bottom) => Placement::Right,
        None => {
            let right_parity = match start {
                VerticalStart::Left => 1,
                VerticalStart::Right => 0,
            };
            if index % 2 == right_parity {
                Placement::Right
            } else {
                Placement::Left
            }
        }
    }
}

/// Initial reveal state of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Shown at once.
    Immediate,
    /// Hidden until it crosses the trigger line.
    Deferred,
}

/// Decides which items are shown at setup.
///
/// `in_region[i]` tells whether item `i` is inside the trigger region.
/// Item 0 is always shown, as is every item up to the last one already in
/// the region, so nothing above a visible item waits for a reveal.
#[must_use]
pub fn reveal_plan(in_region: &[bool]) -> Vec<Reveal> {
    let last_visible = in_region.iter().rposition(|v| *v).unwrap_or(0);
    (0..in_region.len())
        .map(|i| {
            if i <= last_visible {
                Reveal::Immediate
            } else {
                Reveal::Deferred
            }
        })
        .collect()
}
