// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-row card arrangement for horizontal mode.

use alloc::vec::Vec;

use chronoline_settings::{HorizontalStart, Side};

/// Extra space above a same-side bottom row, and below a same-side top row.
pub const SAME_SIDE_BUFFER: f64 = 40.0;

/// Row of a card relative to the divider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    /// Above the divider.
    Top,
    /// Below the divider.
    Bottom,
}

impl Row {
    /// Item class for this row.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Top => "timeline__item--top",
            Self::Bottom => "timeline__item--bottom",
        }
    }
}

/// Where one card goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Row.
    pub row: Row,
    /// Fixed height given to the card.
    pub height: f64,
    /// Downward translation, zero for cards that stay put.
    pub offset_y: f64,
}

/// Row assignment and heights for a strip of horizontal cards.
///
/// In the alternating arrangement, cards of one index parity form the top
/// row and the other parity the bottom row, each card taking the height of
/// the tallest card of its parity. The bottom row is pushed down by the top
/// row's height, where the divider sits.
///
/// In same-side mode every card takes the height of the tallest card and the
/// strip gains a [`SAME_SIDE_BUFFER`] band on the empty side.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    items: Vec<ItemPlacement>,
    scroller_height: f64,
    divider_y: f64,
}

impl RowLayout {
    /// Arranges cards with the given natural heights.
    ///
    /// `same_side` is the output of
    /// [`resolve_side`](chronoline_settings::resolve_side) for horizontal
    /// orientation.
    #[must_use]
    pub fn compute(heights: &[f64], start: HorizontalStart, same_side: Option<Side>) -> Self {
        let tallest_of = |parity: usize| {
            heights
                .iter()
                .skip(parity)
                .step_by(2)
                .fold(0.0_f64, |acc, h| acc.max(*h))
        };
        let even = tallest_of(0);
        let odd = tallest_of(1);

        if let Some(side) = same_side {
            let tallest = even.max(odd);
            let (row, offset_y, divider_y) = match side {
                Side::Bottom | Side::Right => (Row::Bottom, SAME_SIDE_BUFFER, SAME_SIDE_BUFFER),
                Side::Top | Side::Left => (Row::Top, 0.0, tallest),
            };
            let items = heights
                .iter()
                .map(|_| ItemPlacement {
                    row,
                    height: tallest,
                    offset_y,
                })
                .collect();
            return Self {
                items,
                scroller_height: tallest + SAME_SIDE_BUFFER,
                divider_y,
            };
        }

        let top_parity = match start {
            HorizontalStart::Top => 0,
            HorizontalStart::Bottom => 1,
        };
        let top_height = if top_parity == 0 { even } else { odd };
        let items = (0..heights.len())
            .map(|i| {
                let height = if i % 2 == 0 { even } else { odd };
                if i % 2 == top_parity {
                    ItemPlacement {
                        row: Row::Top,
                        height,
                        offset_y: 0.0,
                    }
                } else {
                    ItemPlacement {
                        row: Row::Bottom,
                        height,
                        offset_y: top_height,
                    }
                }
            })
            .collect();
        Self {
            items,
            scroller_height: even + odd,
            divider_y: top_height,
        }
    }

    /// Per-card placements, in item order.
    #[must_use]
    pub fn items(&self) -> &[ItemPlacement] {
        &self.items
    }

    /// Height of the scrolling strip.
    #[must_use]
    pub fn scroller_height(&self) -> f64 {
        self.scroller_height
    }

    /// Vertical position of the divider line and navigation buttons.
    #[must_use]
    pub fn divider_y(&self) -> f64 {
        self.divider_y
    }
}
