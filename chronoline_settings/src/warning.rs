// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::Key;

/// A configuration value that was corrected during resolution.
///
/// Warnings never abort resolution: the offending value is replaced (by the
/// default, or by the nearest valid value for clamped settings) and
/// processing continues.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SettingsWarning {
    /// An integer setting received something that is not an integer.
    #[error("`{key}` must be an integer, got `{value}`; using {default}")]
    NotAnInteger {
        /// Setting.
        key: Key,
        /// Offending value.
        value: String,
        /// Value used instead.
        default: i64,
    },
    /// An integer setting is below its minimum.
    #[error("`{key}` must be at least {min}, got {value}; using {default}")]
    OutOfRange {
        /// Setting.
        key: Key,
        /// Offending value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Value used instead.
        default: i64,
    },
    /// An enumerated setting received a value outside its accepted set.
    #[error("`{key}` must be one of {expected}, got `{value}`; using `{default}`")]
    Unrecognised {
        /// Setting.
        key: Key,
        /// Offending value.
        value: String,
        /// Accepted values, for the message.
        expected: &'static str,
        /// Value used instead.
        default: &'static str,
    },
    /// `verticalTrigger` has no numeric prefix.
    #[error("`verticalTrigger` value `{value}` has no numeric part; using 15%")]
    TriggerMissingValue {
        /// Offending value.
        value: String,
    },
    /// `verticalTrigger` uses a unit other than `px` or `%`.
    #[error("`verticalTrigger` must be a percentage or pixel value, got `{value}`; using 15%")]
    TriggerUnit {
        /// Offending value.
        value: String,
    },
    /// A percentage `verticalTrigger` is outside `0..=100`.
    #[error("`verticalTrigger` percentage must be between 0 and 100, got {value}%; using 15%")]
    TriggerPercentRange {
        /// Offending percentage.
        value: f64,
    },
    /// A pixel `verticalTrigger` is negative.
    #[error("`verticalTrigger` pixel value must not be negative, got {value}px; using 15%")]
    TriggerNegativePx {
        /// Offending pixel value.
        value: f64,
    },
    /// `moveItems` exceeds the number of items.
    #[error("`moveItems` is {value} but there are only {item_count} items; clamped")]
    MoveItemsTooLarge {
        /// Requested step.
        value: i64,
        /// Number of items.
        item_count: usize,
    },
    /// `startIndex` is negative.
    #[error("`startIndex` must not be negative, got {value}; using 0")]
    StartIndexNegative {
        /// Requested index.
        value: i64,
    },
    /// `startIndex` is past the last item.
    #[error("`startIndex` is {value} but the last item index is {last}; clamped")]
    StartIndexTooLarge {
        /// Requested index.
        value: i64,
        /// Last valid index.
        last: usize,
    },
}

impl SettingsWarning {
    /// The setting this warning is about.
    #[must_use]
    pub fn key(&self) -> Key {
        match self {
            Self::NotAnInteger { key, .. }
            | Self::OutOfRange { key, .. }
            | Self::Unrecognised { key, .. } => *key,
            Self::TriggerMissingValue { .. }
            | Self::TriggerUnit { .. }
            | Self::TriggerPercentRange { .. }
            | Self::TriggerNegativePx { .. } => Key::VerticalTrigger,
            Self::MoveItemsTooLarge { .. } => Key::MoveItems,
            Self::StartIndexNegative { .. } | Self::StartIndexTooLarge { .. } => Key::StartIndex,
        }
    }
}
