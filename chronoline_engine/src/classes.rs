// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names that make up the timeline markup contract.

/// Required viewport element inside the container.
pub const WRAP: &str = "timeline__wrap";
/// Required scroller inside the wrap; its children are the items.
pub const ITEMS: &str = "timeline__items";
/// Item content, wrapped once at setup.
pub const CONTENT: &str = "timeline__content";
/// Inserted around [`CONTENT`].
pub const CONTENT_WRAP: &str = "timeline__content__wrap";
/// Inserted around [`CONTENT_WRAP`].
pub const ITEM_INNER: &str = "timeline__item__inner";

/// Container is laid out horizontally.
pub const HORIZONTAL: &str = "timeline--horizontal";
/// Viewport is at or below the `minWidth` breakpoint.
pub const MOBILE: &str = "timeline--mobile";
/// Container has completed at least one setup.
pub const LOADED: &str = "timeline--loaded";

/// Highlighted item.
pub const ACTIVE: &str = "timeline__item--active";
/// Vertical item waiting to be revealed.
pub const ANIMATED: &str = "animated";
/// Vertical item that has been revealed.
pub const FADE_IN: &str = "fadeIn";

/// Divider line in horizontal mode.
pub const DIVIDER: &str = "timeline-divider";
/// Either navigation button.
pub const NAV_BUTTON: &str = "timeline-nav-button";
/// The "previous" button.
pub const NAV_PREV: &str = "timeline-nav-button--prev";
/// The "next" button.
pub const NAV_NEXT: &str = "timeline-nav-button--next";
/// "Previous" button while the first item is active.
pub const AT_START: &str = "timeline-nav-button--at-start";
/// "Next" button while the last item is active.
pub const AT_END: &str = "timeline-nav-button--at-end";
