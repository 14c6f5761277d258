// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw configuration layers: programmatic options and declarative attributes.

use alloc::string::String;

use hashbrown::HashMap;

use crate::{Key, Value};

/// Programmatic options, the highest-precedence layer.
///
/// ```rust
/// use chronoline_settings::{Key, Options};
///
/// let opts = Options::new()
///     .set(Key::Mode, "horizontal")
///     .set(Key::MinWidth, 0)
///     .set(Key::RtlMode, true);
/// assert_eq!(opts.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    values: HashMap<Key, Value>,
}

impl Options {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Options::insert`].
    #[must_use]
    pub fn set(mut self, key: Key, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option by name, as a host binding would receive it.
    ///
    /// Unknown names are ignored; returns `false` for them.
    pub fn set_named(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.insert(key, value);
                true
            }
            None => {
                log::debug!(option = name; "ignoring unknown timeline option");
                false
            }
        }
    }

    /// Sets an option, returning the previous value.
    pub fn insert(&mut self, key: Key, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key, value.into())
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Declarative per-container attributes, the middle layer.
///
/// Built from the container's `data-*` attributes. Attributes that do not
/// name a setting are skipped. When two spellings of the same setting are
/// present (`data-min-width` and `data-minwidth`), the first one wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    values: HashMap<Key, Value>,
}

impl Attributes {
    /// Collects settings from attribute name/value pairs.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in pairs {
            if let Some(key) = Key::from_attribute(name.as_ref()) {
                values.entry(key).or_insert_with(|| Value::Text(value.into()));
            }
        }
        Self { values }
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Returns `true` if no recognised attributes were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
