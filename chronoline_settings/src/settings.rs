// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved, typed settings record.

use alloc::string::String;
use core::fmt;

use crate::Side;

/// Requested layout mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Cards in a scrolling row.
    Horizontal,
    /// Stacked list with scroll reveal.
    #[default]
    Vertical,
}

impl Mode {
    /// Parses `horizontal` or `vertical`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Row of the first item in horizontal mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalStart {
    /// First item above the divider.
    #[default]
    Top,
    /// First item below the divider.
    Bottom,
}

impl HorizontalStart {
    /// Parses `top` or `bottom`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// The matching [`Side`].
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top => Side::Top,
            Self::Bottom => Side::Bottom,
        }
    }
}

/// Side of the first item in vertical mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalStart {
    /// First item on the left.
    #[default]
    Left,
    /// First item on the right.
    Right,
}

impl VerticalStart {
    /// Parses `left` or `right`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// The matching [`Side`].
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Left => Side::Left,
            Self::Right => Side::Right,
        }
    }
}

/// Unit of a [`VerticalTrigger`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerUnit {
    /// Pixels measured up from the bottom of the viewport.
    Px,
    /// Percentage of the viewport height measured up from the bottom.
    Percent,
}

/// The vertical reveal trigger line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerticalTrigger {
    /// Magnitude, always non-negative. Percentages are within `0..=100`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: TriggerUnit,
}

impl VerticalTrigger {
    /// The built-in trigger, `15%`.
    pub const DEFAULT: Self = Self {
        value: 15.0,
        unit: TriggerUnit::Percent,
    };
}

impl Default for VerticalTrigger {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Formats as a CSS length (`15%`, `40px`), suitable for an observer root margin.
impl fmt::Display for VerticalTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TriggerUnit::Px => write!(f, "{}px", self.value),
            TriggerUnit::Percent => write!(f, "{}%", self.value),
        }
    }
}

/// Same-side rendering policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SameSideNodes {
    /// Items alternate sides.
    #[default]
    Disabled,
    /// All items on the orientation's start side.
    Enabled,
    /// All items on the named side, mapped per orientation by
    /// [`resolve_side`](crate::resolve_side).
    Side(Side),
}

impl SameSideNodes {
    /// Returns `true` unless same-side mode is off.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Whether horizontal navigation is handed to a carousel library.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UseSwiper {
    /// Always use the native layout.
    #[default]
    False,
    /// Use the carousel; failing to resolve it is worth a warning.
    True,
    /// Use the carousel when it happens to be available.
    Auto,
}

impl UseSwiper {
    /// Returns `true` for [`UseSwiper::True`] and [`UseSwiper::Auto`].
    #[must_use]
    pub const fn is_requested(self) -> bool {
        !matches!(self, Self::False)
    }
}

/// Colours forwarded to the theming collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    /// Node colour.
    pub node: Option<String>,
    /// Line colour.
    pub line: Option<String>,
    /// Navigation colour.
    pub nav: Option<String>,
}

impl Colors {
    /// Returns `true` if any colour is configured.
    #[must_use]
    pub fn any(&self) -> bool {
        self.node.is_some() || self.line.is_some() || self.nav.is_some()
    }
}

/// Resolved per-instance configuration.
///
/// Produced by [`resolve`](crate::resolve); never mutated afterwards. The
/// start positions are kept as "explicit or absent" because the side
/// resolver gives an explicit `verticalStartPosition` precedence; use
/// [`Settings::horizontal_start`] and [`Settings::vertical_start`] for the
/// effective values.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Horizontal mode falls back to vertical at or below this width.
    pub min_width: u32,
    /// Vertical mode switches to horizontal above this width.
    pub max_width: u32,
    /// Requested mode.
    pub mode: Mode,
    /// Explicit horizontal start position, if any.
    pub horizontal_start_position: Option<HorizontalStart>,
    /// Explicit vertical start position, if any.
    pub vertical_start_position: Option<VerticalStart>,
    /// Items moved per navigation step, `1..=item_count`.
    pub move_items: usize,
    /// Right-to-left layout.
    pub rtl_mode: bool,
    /// Initially active item, `0..item_count`.
    pub start_index: usize,
    /// Vertical reveal trigger.
    pub vertical_trigger: VerticalTrigger,
    /// Same-side policy.
    pub same_side_nodes: SameSideNodes,
    /// Carousel delegation.
    pub use_swiper: UseSwiper,
    /// Theme colours.
    pub colors: Colors,
    /// Explicit carousel library reference.
    pub carousel_url: Option<String>,
}

impl Settings {
    /// Default breakpoint for both `minWidth` and `maxWidth`.
    pub const DEFAULT_BREAKPOINT: u32 = 600;

    /// Effective horizontal start position.
    #[must_use]
    pub fn horizontal_start(&self) -> HorizontalStart {
        self.horizontal_start_position.unwrap_or_default()
    }

    /// Effective vertical start position.
    #[must_use]
    pub fn vertical_start(&self) -> VerticalStart {
        self.vertical_start_position.unwrap_or_default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_width: Self::DEFAULT_BREAKPOINT,
            max_width: Self::DEFAULT_BREAKPOINT,
            mode: Mode::default(),
            horizontal_start_position: None,
            vertical_start_position: None,
            move_items: 1,
            rtl_mode: false,
            start_index: 0,
            vertical_trigger: VerticalTrigger::DEFAULT,
            same_side_nodes: SameSideNodes::default(),
            use_swiper: UseSwiper::default(),
            colors: Colors::default(),
            carousel_url: None,
        }
    }
}
