// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement helpers shared by both layout modes.

use chronoline_settings::{TriggerUnit, VerticalTrigger};
use kurbo::{Insets, Rect, Size};

/// Viewport height reserved for headings, margins and bottom padding.
const RESERVED_HEIGHT: f64 = 180.0;
/// Divider, spacing and bottom item padding between and below the two rows.
const ROW_GAP: f64 = 90.0;
/// Scaling never shrinks cards below this fraction.
const MIN_SCALE: f64 = 0.75;

/// A scaled dimension's bounds and unscaled value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band {
    /// Smallest allowed value.
    pub min: f64,
    /// Largest allowed value.
    pub max: f64,
    /// Value at scale 1.
    pub default: f64,
}

impl Band {
    const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// `round(default * factor)` clamped into the band.
    #[must_use]
    pub fn scaled(self, factor: f64) -> f64 {
        libm::round(self.default * factor).clamp(self.min, self.max)
    }
}

/// Card dimensions for horizontal mode, scaled to fit the viewport height.
///
/// Two rows of cards plus the divider must fit in the viewport. When they
/// do not, every dimension is scaled down by the same factor (at most to
/// 75%) and clamped to its [`Band`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalScale {
    /// Applied factor in `0.75..=1.0`.
    pub factor: f64,
    /// Card width.
    pub node_width: f64,
    /// Card minimum height.
    pub node_min_height: f64,
    /// Card image size.
    pub image_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Body font size.
    pub text_font_size: f64,
}

impl HorizontalScale {
    /// Card width band.
    pub const NODE_WIDTH: Band = Band::new(150.0, 200.0, 200.0);
    /// Card minimum height band.
    pub const NODE_MIN_HEIGHT: Band = Band::new(135.0, 180.0, 180.0);
    /// Image size band.
    pub const IMAGE_SIZE: Band = Band::new(80.0, 100.0, 100.0);
    /// Title font band.
    pub const TITLE_FONT_SIZE: Band = Band::new(14.0, 18.0, 18.0);
    /// Body font band.
    pub const TEXT_FONT_SIZE: Band = Band::new(11.0, 13.0, 11.0);

    /// Names of the CSS custom properties, in [`css_variables`](Self::css_variables) order.
    pub const VARIABLES: [&'static str; 5] = [
        "--timeline-h-node-width",
        "--timeline-h-node-min-height",
        "--timeline-h-image-size",
        "--timeline-h-title-font-size",
        "--timeline-h-text-font-size",
    ];

    /// Computes the scale for a viewport of the given height.
    #[must_use]
    pub fn for_viewport_height(height: f64) -> Self {
        let available = height - RESERVED_HEIGHT;
        let required = Self::NODE_MIN_HEIGHT.max * 2.0 + ROW_GAP;
        let factor = if available < required {
            (available / required).max(MIN_SCALE)
        } else {
            1.0
        };
        Self {
            factor,
            node_width: Self::NODE_WIDTH.scaled(factor),
            node_min_height: Self::NODE_MIN_HEIGHT.scaled(factor),
            image_size: Self::IMAGE_SIZE.scaled(factor),
            title_font_size: Self::TITLE_FONT_SIZE.scaled(factor),
            text_font_size: Self::TEXT_FONT_SIZE.scaled(factor),
        }
    }

    /// CSS custom properties and their pixel values.
    #[must_use]
    pub fn css_variables(&self) -> [(&'static str, f64); 5] {
        let [width, min_height, image, title, text] = Self::VARIABLES;
        [
            (width, self.node_width),
            (min_height, self.node_min_height),
            (image, self.image_size),
            (title, self.title_font_size),
            (text, self.text_font_size),
        ]
    }
}

/// Number of whole cards that fit in the wrap; never less than one.
#[must_use]
pub fn visible_count(wrap_width: f64, item_width: f64) -> usize {
    if item_width.is_nan() || item_width <= 0.0 || !wrap_width.is_finite() {
        return 1;
    }
    let fit = libm::floor(wrap_width / item_width);
    if fit < 1.0 {
        return 1;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Non-negative whole number; saturates for absurd widths"
    )]
    {
        fit as usize
    }
}

/// Largest valid scroll anchor: `max(0, item_count - visible)`.
#[must_use]
pub const fn max_scroll_index(item_count: usize, visible: usize) -> usize {
    item_count.saturating_sub(visible)
}

/// Translation that brings card `index` into view.
///
/// Cards sit side by side at `index * item_width`. The result is the
/// smallest shift that shows the card's right edge (inside the wrap's
/// horizontal padding) without pushing its left edge out of view.
#[must_use]
pub fn scroll_offset(index: usize, item_width: f64, wrap_width: f64, padding: Insets) -> f64 {
    let left = index as f64 * item_width;
    let needed = left + item_width + padding.x0 + padding.x1 - wrap_width;
    needed.max(0.0).min(left)
}

/// CSS transform for a scroller shifted left by `offset` pixels.
#[must_use]
pub fn translate_x(offset: f64) -> alloc::string::String {
    alloc::format!("translate3d(-{offset}px, 0, 0)")
}

fn fits(viewport_height: f64, trigger: &VerticalTrigger) -> bool {
    trigger.unit != TriggerUnit::Px || trigger.value < viewport_height
}

/// The trigger in effect for a viewport `viewport_height` pixels tall.
///
/// A pixel trigger that is not smaller than the viewport falls back to
/// [`VerticalTrigger::DEFAULT`] and logs a warning. Resolve this once per
/// layout and keep the result.
#[must_use]
pub fn effective_trigger(viewport_height: f64, trigger: &VerticalTrigger) -> VerticalTrigger {
    if fits(viewport_height, trigger) {
        return *trigger;
    }
    log::warn!(
        key = "verticalTrigger";
        "vertical trigger {trigger} reaches past the viewport height {viewport_height}px; using {}",
        VerticalTrigger::DEFAULT
    );
    VerticalTrigger::DEFAULT
}

/// Viewport y coordinate of the reveal trigger line.
///
/// Percent triggers are measured up from the bottom as a share of the
/// viewport height; pixel triggers as a distance. A trigger that does not fit
/// is measured as [`VerticalTrigger::DEFAULT`] without a warning; see
/// [`effective_trigger`].
#[must_use]
pub fn trigger_line(viewport_height: f64, trigger: &VerticalTrigger) -> f64 {
    let trigger = if fits(viewport_height, trigger) {
        *trigger
    } else {
        VerticalTrigger::DEFAULT
    };
    match trigger.unit {
        TriggerUnit::Px => libm::floor(viewport_height - trigger.value),
        TriggerUnit::Percent => libm::floor(viewport_height * (100.0 - trigger.value) / 100.0),
    }
}

/// Returns `true` if `rect` (in viewport coordinates) has reached the
/// trigger line and overlaps the viewport horizontally and from the top.
#[must_use]
pub fn in_trigger_region(rect: Rect, viewport: Size, line: f64) -> bool {
    rect.y0 <= line && rect.x0 <= viewport.width && rect.y1 >= 0.0 && rect.x1 >= 0.0
}
