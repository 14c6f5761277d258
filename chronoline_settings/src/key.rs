// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setting keys and their external spellings.

use core::fmt;

/// A recognised setting.
///
/// Every key has one canonical camelCase name (see [`Key::name`]) which is
/// used in warnings and logs. Declarative attributes and programmatic option
/// names are matched leniently: case is ignored and `-` separators are
/// dropped, so `data-min-width`, `data-minwidth` and `minWidth` all map to
/// [`Key::MinWidth`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Viewport width at or below which horizontal mode falls back to vertical.
    MinWidth,
    /// Legacy alias of [`Key::MinWidth`].
    ForceVerticalMode,
    /// Viewport width above which vertical mode switches to horizontal.
    MaxWidth,
    /// `top` or `bottom`: row of the first item in horizontal mode.
    HorizontalStartPosition,
    /// `horizontal` or `vertical`.
    Mode,
    /// Number of items moved per navigation step.
    MoveItems,
    /// Right-to-left layout.
    RtlMode,
    /// Initially active item.
    StartIndex,
    /// `left` or `right`: side of the first item in vertical mode.
    VerticalStartPosition,
    /// Reveal trigger line, `px` or `%`.
    VerticalTrigger,
    /// `true`, `false` or `auto`: hand horizontal control to a carousel library.
    UseSwiper,
    /// Render every item on one side.
    SameSideNodes,
    /// Node colour forwarded to the theming collaborator.
    NodeColor,
    /// Line colour forwarded to the theming collaborator.
    LineColor,
    /// Navigation colour forwarded to the theming collaborator.
    NavColor,
    /// Explicit URL reference for the carousel library.
    CarouselUrl,
}

impl Key {
    /// Every key, in resolution order.
    pub const ALL: [Self; 16] = [
        Self::MinWidth,
        Self::ForceVerticalMode,
        Self::MaxWidth,
        Self::HorizontalStartPosition,
        Self::Mode,
        Self::MoveItems,
        Self::RtlMode,
        Self::StartIndex,
        Self::VerticalStartPosition,
        Self::VerticalTrigger,
        Self::UseSwiper,
        Self::SameSideNodes,
        Self::NodeColor,
        Self::LineColor,
        Self::NavColor,
        Self::CarouselUrl,
    ];

    /// Canonical camelCase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinWidth => "minWidth",
            Self::ForceVerticalMode => "forceVerticalMode",
            Self::MaxWidth => "maxWidth",
            Self::HorizontalStartPosition => "horizontalStartPosition",
            Self::Mode => "mode",
            Self::MoveItems => "moveItems",
            Self::RtlMode => "rtlMode",
            Self::StartIndex => "startIndex",
            Self::VerticalStartPosition => "verticalStartPosition",
            Self::VerticalTrigger => "verticalTrigger",
            Self::UseSwiper => "useSwiper",
            Self::SameSideNodes => "sameSideNodes",
            Self::NodeColor => "nodeColor",
            Self::LineColor => "lineColor",
            Self::NavColor => "navColor",
            Self::CarouselUrl => "carouselUrl",
        }
    }

    /// Looks up a key by option name.
    ///
    /// Matching ignores ASCII case and `-`/`_` separators. `swiperCdn` is
    /// accepted as an alias of [`Key::CarouselUrl`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if loose_eq(name, "swiperCdn") {
            return Some(Self::CarouselUrl);
        }
        Self::ALL.into_iter().find(|k| loose_eq(name, k.name()))
    }

    /// Looks up a key by `data-*` attribute name.
    ///
    /// Returns `None` for attributes without the `data-` prefix.
    #[must_use]
    pub fn from_attribute(attribute: &str) -> Option<Self> {
        let rest = attribute
            .strip_prefix("data-")
            .or_else(|| attribute.strip_prefix("DATA-"))?;
        Self::from_name(rest)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn loose_eq(input: &str, canonical: &str) -> bool {
    let mut a = input.bytes().filter(|b| *b != b'-' && *b != b'_');
    let mut b = canonical.bytes();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
            _ => return false,
        }
    }
}
