// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance ids to containers.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Maps stable instance ids to their container elements.
///
/// Populated on every setup (re-setup overwrites the same id) and cleared
/// only by full teardown. Collaborators use an id from here to reach the
/// instance's [`NavigationApi`](crate::NavigationApi).
#[derive(Clone, Debug)]
pub struct Registry<E> {
    entries: HashMap<String, E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<E: Copy> Registry<E> {
    /// Records `container` under `id`, returning the previous container.
    pub fn insert(&mut self, id: &str, container: E) -> Option<E> {
        self.entries.insert(id.into(), container)
    }

    /// Container registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<E> {
        self.entries.get(id).copied()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;

    #[test]
    fn overwrite_then_clear() {
        let mut r = Registry::default();
        assert_eq!(r.insert("b", 1_u8), None);
        assert_eq!(r.insert("a", 2), None);
        assert_eq!(r.insert("b", 3), Some(1));
        assert_eq!(r.get("b"), Some(3));
        assert_eq!(r.ids(), ["a", "b"]);

        r.clear();
        assert!(r.is_empty());
        assert!(!r.contains("a"));
    }
}
