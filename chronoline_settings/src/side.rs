// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective rendering side for same-side mode.

use core::fmt;

use crate::{SameSideNodes, Settings};

/// Axis along which a timeline is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cards in a scrolling row; sides are `top`/`bottom`.
    Horizontal,
    /// Stacked list; sides are `left`/`right`.
    Vertical,
}

/// A rendering side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the divider (horizontal).
    Top,
    /// Below the divider (horizontal).
    Bottom,
    /// Left of the divider (vertical).
    Left,
    /// Right of the divider (vertical).
    Right,
}

impl Side {
    /// Parses `top`, `bottom`, `left` or `right`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Lowercase name, as used in class names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves the side every item is rendered on when same-side mode is active.
///
/// Returns `None` when same-side mode is off. Otherwise:
///
/// - `sameSideNodes = true` takes the orientation's start position
///   (`top`/`left` by default).
/// - Horizontal: `top`/`bottom` pass through, `left` maps to `top` and
///   `right` maps to `bottom`.
/// - Vertical: an explicit `verticalStartPosition` wins. Otherwise `top`
///   maps to `right` under RTL and `left` otherwise, `bottom` maps to `left`
///   under RTL and `right` otherwise, and `left`/`right` pass through.
#[must_use]
pub fn resolve_side(settings: &Settings, orientation: Orientation, rtl: bool) -> Option<Side> {
    let requested = match settings.same_side_nodes {
        SameSideNodes::Disabled => return None,
        SameSideNodes::Enabled => {
            return Some(match orientation {
                Orientation::Horizontal => settings.horizontal_start().side(),
                Orientation::Vertical => settings.vertical_start().side(),
            });
        }
        SameSideNodes::Side(side) => side,
    };
    Some(match orientation {
        Orientation::Horizontal => match requested {
            Side::Top | Side::Left => Side::Top,
            Side::Bottom | Side::Right => Side::Bottom,
        },
        Orientation::Vertical => {
            if let Some(explicit) = settings.vertical_start_position {
                return Some(explicit.side());
            }
            match (requested, rtl) {
                (Side::Top, false) | (Side::Bottom, true) | (Side::Left, _) => Side::Left,
                (Side::Top, true) | (Side::Bottom, false) | (Side::Right, _) => Side::Right,
            }
        }
    })
}
