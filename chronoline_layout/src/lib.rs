// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoline Layout: the measurement-free core of timeline layout.
//!
//! Everything in this crate is a pure function of numbers the host has
//! already measured. Nothing here touches a document.
//!
//! - Geometry: card scaling for the viewport height ([`HorizontalScale`]),
//!   how many cards fit ([`visible_count`]), the translation that brings a
//!   card into view ([`scroll_offset`]) and the vertical reveal trigger
//!   ([`effective_trigger`], [`trigger_line`], [`in_trigger_region`]).
//! - Horizontal mode: the two-row arrangement ([`RowLayout`]) and the
//!   navigation state machine ([`Cursor`]).
//! - Vertical mode: left/right [`placement`] and the initial
//!   [`reveal_plan`].
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoline_layout::{Cursor, Direction, scroll_offset, visible_count};
//! use kurbo::Insets;
//!
//! let visible = visible_count(840.0, 200.0);
//! assert_eq!(visible, 4);
//!
//! let mut cursor = Cursor::start_at(6, visible, 0, false);
//! assert!(cursor.boundary().at_start);
//!
//! for _ in 0..5 {
//!     cursor.advance(Direction::Next, 1);
//! }
//! // The last card is highlighted; scrolling stops once the strip is full.
//! assert_eq!(cursor.active(), 5);
//! assert_eq!(cursor.current(), 2);
//! assert!(cursor.boundary().at_end);
//!
//! // Shift the strip just far enough to show all of the active card.
//! let offset = scroll_offset(cursor.active(), 200.0, 840.0, Insets::ZERO);
//! assert_eq!(offset, 360.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod horizontal;
mod navigation;
mod vertical;

pub use geometry::{
    Band, HorizontalScale, effective_trigger, in_trigger_region, max_scroll_index, scroll_offset,
    translate_x, trigger_line, visible_count,
};
pub use horizontal::{ItemPlacement, Row, RowLayout, SAME_SIDE_BUFFER};
pub use navigation::{Boundary, Cursor, Direction};
pub use vertical::{Placement, Reveal, placement, reveal_plan};
