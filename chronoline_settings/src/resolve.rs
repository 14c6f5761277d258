// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging and validation of the configuration layers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    Attributes, Colors, HorizontalStart, Key, Mode, Options, SameSideNodes, Settings,
    SettingsWarning, Side, TriggerUnit, UseSwiper, Value, VerticalStart, VerticalTrigger,
};

/// Resolves the settings of one timeline with `item_count` items.
///
/// Each setting is taken from `options`, then `attributes`, then the
/// built-in default. `minWidth` additionally accepts the legacy
/// `forceVerticalMode` key, checked after `minWidth` within each layer.
///
/// Invalid values never fail resolution. They are replaced and a
/// [`SettingsWarning`] is returned for each correction (and logged at
/// `warn` level). With at least one item the result satisfies
/// `1 <= move_items <= item_count` and `start_index < item_count`.
///
/// ```rust
/// use chronoline_settings::{resolve, Attributes, Key, Mode, Options};
///
/// let attrs = Attributes::from_pairs([("data-mode", "vertical"), ("data-start-index", "9")]);
/// let opts = Options::new().set(Key::Mode, "horizontal");
/// let (settings, warnings) = resolve(&attrs, &opts, 4);
///
/// assert_eq!(settings.mode, Mode::Horizontal);
/// assert_eq!(settings.start_index, 3);
/// assert_eq!(warnings.len(), 1);
/// ```
#[must_use]
pub fn resolve(
    attributes: &Attributes,
    options: &Options,
    item_count: usize,
) -> (Settings, Vec<SettingsWarning>) {
    let mut r = Resolver {
        attributes,
        options,
        warnings: Vec::new(),
    };

    let min_width = {
        let raw = options
            .get(Key::MinWidth)
            .map(|v| (Key::MinWidth, v))
            .or_else(|| options.get(Key::ForceVerticalMode).map(|v| (Key::ForceVerticalMode, v)))
            .or_else(|| attributes.get(Key::MinWidth).map(|v| (Key::MinWidth, v)))
            .or_else(|| {
                attributes
                    .get(Key::ForceVerticalMode)
                    .map(|v| (Key::ForceVerticalMode, v))
            });
        match raw {
            Some((key, value)) => r.breakpoint(key, value),
            None => Settings::DEFAULT_BREAKPOINT,
        }
    };
    let max_width = match r.raw(Key::MaxWidth) {
        Some(value) => r.breakpoint(Key::MaxWidth, value),
        None => Settings::DEFAULT_BREAKPOINT,
    };

    let mode = r
        .enumerated(Key::Mode, "`horizontal` or `vertical`", "vertical", |v| {
            Mode::from_name(&v.to_text())
        })
        .unwrap_or_default();
    let horizontal_start_position =
        r.enumerated(Key::HorizontalStartPosition, "`top` or `bottom`", "top", |v| {
            HorizontalStart::from_name(&v.to_text())
        });
    let vertical_start_position =
        r.enumerated(Key::VerticalStartPosition, "`left` or `right`", "left", |v| {
            VerticalStart::from_name(&v.to_text())
        });
    let rtl_mode = r
        .enumerated(Key::RtlMode, "`true` or `false`", "false", Value::as_bool)
        .unwrap_or(false);
    let same_side_nodes = r
        .enumerated(
            Key::SameSideNodes,
            "`top`, `bottom`, `left`, `right`, `true` or `false`",
            "false",
            |v| match v.as_bool() {
                Some(true) => Some(SameSideNodes::Enabled),
                Some(false) => Some(SameSideNodes::Disabled),
                None => Side::from_name(&v.to_text()).map(SameSideNodes::Side),
            },
        )
        .unwrap_or_default();
    let use_swiper = r
        .enumerated(Key::UseSwiper, "`true`, `false` or `auto`", "false", |v| {
            match v.as_bool() {
                Some(true) => Some(UseSwiper::True),
                Some(false) => Some(UseSwiper::False),
                None => (v.to_text() == "auto").then_some(UseSwiper::Auto),
            }
        })
        .unwrap_or_default();

    let move_items = r.move_items(item_count);
    let start_index = r.start_index(item_count);
    let vertical_trigger = r.vertical_trigger();

    let colors = Colors {
        node: r.text(Key::NodeColor),
        line: r.text(Key::LineColor),
        nav: r.text(Key::NavColor),
    };
    let carousel_url = r.text(Key::CarouselUrl);

    for warning in &r.warnings {
        log::warn!(key = warning.key().name(); "{warning}");
    }

    let settings = Settings {
        min_width,
        max_width,
        mode,
        horizontal_start_position,
        vertical_start_position,
        move_items,
        rtl_mode,
        start_index,
        vertical_trigger,
        same_side_nodes,
        use_swiper,
        colors,
        carousel_url,
    };
    (settings, r.warnings)
}

struct Resolver<'a> {
    attributes: &'a Attributes,
    options: &'a Options,
    warnings: Vec<SettingsWarning>,
}

impl<'a> Resolver<'a> {
    fn raw(&self, key: Key) -> Option<&'a Value> {
        self.options.get(key).or_else(|| self.attributes.get(key))
    }

    fn integer(&mut self, key: Key, value: &Value, min: i64, default: i64) -> i64 {
        match value.as_integer() {
            None => {
                self.warnings.push(SettingsWarning::NotAnInteger {
                    key,
                    value: value.to_text(),
                    default,
                });
                default
            }
            Some(n) if n < min => {
                self.warnings.push(SettingsWarning::OutOfRange {
                    key,
                    value: n,
                    min,
                    default,
                });
                default
            }
            Some(n) => n,
        }
    }

    fn breakpoint(&mut self, key: Key, value: &Value) -> u32 {
        let n = self.integer(key, value, 0, i64::from(Settings::DEFAULT_BREAKPOINT));
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    fn enumerated<T>(
        &mut self,
        key: Key,
        expected: &'static str,
        default: &'static str,
        parse: impl FnOnce(&Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.raw(key)?;
        let parsed = parse(value);
        if parsed.is_none() {
            self.warnings.push(SettingsWarning::Unrecognised {
                key,
                value: value.to_text(),
                expected,
                default,
            });
        }
        parsed
    }

    fn move_items(&mut self, item_count: usize) -> usize {
        let Some(value) = self.raw(Key::MoveItems) else {
            return 1;
        };
        let n = self.integer(Key::MoveItems, value, 1, 1);
        let step = usize::try_from(n).unwrap_or(usize::MAX);
        if item_count > 0 && step > item_count {
            self.warnings.push(SettingsWarning::MoveItemsTooLarge {
                value: n,
                item_count,
            });
            return item_count;
        }
        step
    }

    fn start_index(&mut self, item_count: usize) -> usize {
        let Some(value) = self.raw(Key::StartIndex) else {
            return 0;
        };
        let n = self.integer(Key::StartIndex, value, i64::MIN, 0);
        if n < 0 {
            self.warnings
                .push(SettingsWarning::StartIndexNegative { value: n });
            return 0;
        }
        let index = usize::try_from(n).unwrap_or(usize::MAX);
        let last = item_count.saturating_sub(1);
        if index > last {
            self.warnings
                .push(SettingsWarning::StartIndexTooLarge { value: n, last });
            return last;
        }
        index
    }

    fn vertical_trigger(&mut self) -> VerticalTrigger {
        let Some(value) = self.raw(Key::VerticalTrigger) else {
            return VerticalTrigger::DEFAULT;
        };
        let text = value.to_text();
        let (number, unit) = split_numeric_prefix(text.trim());
        let mut valid = true;

        let magnitude = number.parse::<f64>().ok();
        if magnitude.is_none() {
            self.warnings
                .push(SettingsWarning::TriggerMissingValue { value: text.clone() });
            valid = false;
        }
        let unit = match unit {
            "px" => Some(TriggerUnit::Px),
            "%" => Some(TriggerUnit::Percent),
            _ => {
                self.warnings
                    .push(SettingsWarning::TriggerUnit { value: text.clone() });
                valid = false;
                None
            }
        };
        match (magnitude, unit) {
            (Some(v), Some(TriggerUnit::Percent)) if !(0.0..=100.0).contains(&v) => {
                self.warnings
                    .push(SettingsWarning::TriggerPercentRange { value: v });
                valid = false;
            }
            (Some(v), Some(TriggerUnit::Px)) if v < 0.0 => {
                self.warnings
                    .push(SettingsWarning::TriggerNegativePx { value: v });
                valid = false;
            }
            _ => {}
        }

        match (valid, magnitude, unit) {
            (true, Some(value), Some(unit)) => VerticalTrigger { value, unit },
            _ => VerticalTrigger::DEFAULT,
        }
    }

    fn text(&self, key: Key) -> Option<String> {
        let text = self.raw(key)?.to_text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.into())
    }
}

/// Splits `-?digits[.digits]` off the front of `s`.
fn split_numeric_prefix(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    s.split_at(end)
}
