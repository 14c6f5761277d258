// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoline Settings: layered configuration for timeline instances.
//!
//! A timeline is configured from three layers, in decreasing precedence:
//!
//! - [`Options`]: values passed programmatically when initialising.
//! - [`Attributes`]: `data-*` attributes declared on the container element.
//! - Built-in defaults.
//!
//! [`resolve`] merges the layers into a typed [`Settings`] record. Invalid
//! values never abort resolution; they are replaced and reported as
//! [`SettingsWarning`]s so the timeline still renders.
//!
//! [`resolve_side`] answers where items go when same-side mode is active.
//! The mapping depends on orientation and on right-to-left layout, and an
//! explicit `verticalStartPosition` takes precedence in vertical mode.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoline_settings::{
//!     resolve, resolve_side, Attributes, Key, Options, Orientation, Side, TriggerUnit,
//! };
//!
//! let attrs = Attributes::from_pairs([
//!     ("data-same-side-nodes", "top"),
//!     ("data-vertical-trigger", "150%"),
//! ]);
//! let opts = Options::new().set(Key::RtlMode, true);
//!
//! let (settings, warnings) = resolve(&attrs, &opts, 6);
//!
//! // Out-of-range percentage falls back to the default trigger.
//! assert_eq!(settings.vertical_trigger.unit, TriggerUnit::Percent);
//! assert_eq!(settings.vertical_trigger.value, 15.0);
//! assert_eq!(warnings.len(), 1);
//!
//! // `top` under RTL maps to the right-hand side of a vertical timeline.
//! assert_eq!(
//!     resolve_side(&settings, Orientation::Vertical, settings.rtl_mode),
//!     Some(Side::Right)
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod key;
mod layers;
mod resolve;
mod settings;
mod side;
mod value;
mod warning;

pub use key::Key;
pub use layers::{Attributes, Options};
pub use resolve::resolve;
pub use settings::{
    Colors, HorizontalStart, Mode, SameSideNodes, Settings, TriggerUnit, UseSwiper,
    VerticalStart, VerticalTrigger,
};
pub use side::{Orientation, Side, resolve_side};
pub use value::Value;
pub use warning::SettingsWarning;
