// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoline Engine: responsive timelines over an abstract document.
//!
//! A [`Timeline`] manages timeline containers in a [`Document`]. For each
//! container it resolves [`Settings`](chronoline_settings::Settings), then
//! lays the items out in one of two modes:
//!
//! - Horizontal: fixed-width cards in a scrolling strip with previous/next
//!   buttons, driven by a [`Cursor`](chronoline_layout::Cursor). A
//!   [`CarouselDelegate`] can take over scrolling when a carousel library is
//!   available.
//! - Vertical: items placed left or right of a centre line, revealed as they
//!   cross a trigger line.
//!
//! The mode depends on the viewport width and is recomputed, debounced, when
//! the width changes. Every container is set up independently; one with
//! broken markup is reported through [`Collaborators::notify_error`] and
//! skipped.
//!
//! Collaborators (deep links, keyboard, modals) find instances by id in the
//! [`Registry`], drive them through a [`NavigationApi`], and learn about
//! setups through [`Initialized`] events on the [`EventBus`].
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoline_engine::{Document, MemoryDocument, Timeline, classes};
//! use chronoline_settings::{Key, Options};
//! use kurbo::Size;
//!
//! let mut doc = MemoryDocument::new(Size::new(1024.0, 1000.0));
//! let container = doc.element("div", "timeline");
//! let wrap = doc.element("div", classes::WRAP);
//! let items = doc.element("div", classes::ITEMS);
//! let body = doc.body();
//! doc.set_attribute(container, "id", "history");
//! doc.append_child(body, container);
//! doc.append_child(container, wrap);
//! doc.append_child(wrap, items);
//! doc.set_natural_size(wrap, Size::new(600.0, 400.0));
//! for _ in 0..6 {
//!     let item = doc.element("div", "timeline__item");
//!     doc.set_natural_size(item, Size::new(200.0, 150.0));
//!     doc.append_child(items, item);
//! }
//!
//! let mut timeline = Timeline::new(doc);
//! let options = Options::new().set(Key::Mode, "horizontal").set(Key::MinWidth, 0);
//! assert_eq!(timeline.initialize(&[container], &options, 0), 1);
//!
//! let mut api = timeline.api("history").unwrap();
//! api.set_current_index(5);
//! api.update_position();
//! // The last card is highlighted while the strip stops at the last full view.
//! assert_eq!(api.active_index(), Some(5));
//! assert_eq!(api.current_index(), Some(3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod api;
mod carousel;
pub mod classes;
mod document;
mod error;
mod events;
mod hooks;
mod horizontal;
mod instance;
mod memory;
mod modal;
mod registry;
mod timeline;
mod vertical;

pub use api::{InstanceInfo, NavigationApi};
pub use carousel::{
    CAROUSEL, CAROUSEL_SLIDE, CAROUSEL_WRAPPER, Carousel, CarouselDelegate, CarouselLibrary,
    CarouselLoader, CarouselOptions, ResolveStrategy, SlidesPerView,
};
pub use document::{Descendant, Document};
pub use error::{CarouselError, ErrorKind, StructureError};
pub use events::{EventBus, Initialized, SubscriptionId};
pub use hooks::{Collaborators, NoCollaborators};
pub use memory::{MemoryDocument, NodeId};
pub use registry::Registry;
pub use timeline::{FADE_IN_DELAY, Observations, RESIZE_DEBOUNCE, Timeline};
