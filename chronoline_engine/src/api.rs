// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles given to collaborators.

use chronoline_settings::{Orientation, Settings};

use crate::instance::{Instance, Phase};
use crate::{Collaborators, Document, Timeline, horizontal};

/// Navigation API of one instance, as used by deep-linking and keyboard
/// collaborators.
///
/// Obtained from [`Timeline::api`]. Only horizontal layouts navigate; in
/// vertical mode every call is a no-op.
pub struct NavigationApi<'a, D: Document, C> {
    pub(crate) timeline: &'a mut Timeline<D, C>,
    pub(crate) index: usize,
}

impl<D: Document, C> core::fmt::Debug for NavigationApi<'_, D, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationApi")
            .field("id", &self.instance().id)
            .finish_non_exhaustive()
    }
}

impl<D: Document, C: Collaborators<D>> NavigationApi<'_, D, C> {
    /// Instance id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.instance().id
    }

    /// Selects `index` without rendering.
    ///
    /// The active index is clamped to the items and the scroll anchor to the
    /// last scrollable position, independently. Returns `true` if either
    /// changed; follow with [`update_position`](Self::update_position).
    pub fn set_current_index(&mut self, index: usize) -> bool {
        match &mut self.timeline.instances[self.index].phase {
            Phase::Horizontal(state) => state.cursor.set_index(index),
            _ => false,
        }
    }

    /// Re-applies the strip position, the active highlight and the button
    /// state, then reports the active item's `data-node-id`.
    pub fn update_position(&mut self) {
        let Timeline {
            doc,
            hooks,
            instances,
            ..
        } = &mut *self.timeline;
        let inst = &mut instances[self.index];
        if inst.horizontal().is_none() {
            return;
        }
        horizontal::render(doc, inst);
        if let Some(node_id) = horizontal::active_node_id(doc, inst) {
            hooks.active_node_changed(doc, inst.container, &node_id);
        }
    }

    /// Active index, in horizontal mode.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.instance().horizontal().map(|s| s.cursor.active())
    }

    /// Scroll anchor index, in horizontal mode.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.instance().horizontal().map(|s| s.cursor.current())
    }
}

impl<D: Document, C> NavigationApi<'_, D, C> {
    fn instance(&self) -> &Instance<D::Element> {
        &self.timeline.instances[self.index]
    }
}

/// Read-only view of one managed instance.
#[derive(Debug)]
pub struct InstanceInfo<'a, E> {
    pub(crate) inst: &'a Instance<E>,
}

impl<'a, E: Copy + PartialEq> InstanceInfo<'a, E> {
    /// Instance id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.inst.id
    }

    /// Container element.
    #[must_use]
    pub fn container(&self) -> E {
        self.inst.container
    }

    /// Items, in display order.
    #[must_use]
    pub fn items(&self) -> &'a [E] {
        &self.inst.items
    }

    /// Settings resolved by the latest setup.
    #[must_use]
    pub fn settings(&self) -> &'a Settings {
        &self.inst.settings
    }

    /// Current layout, or `None` after a reset.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        self.inst.orientation()
    }

    /// Active index, in horizontal mode.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.inst.horizontal().map(|s| s.cursor.active())
    }

    /// Scroll anchor index, in horizontal mode.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.inst.horizontal().map(|s| s.cursor.current())
    }

    /// Number of setup passes so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inst.generation
    }

    /// Number of live event bindings.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inst.listeners.len()
    }

    /// Returns `true` while a carousel delegate is attached.
    #[must_use]
    pub fn has_carousel(&self) -> bool {
        self.inst.adapter.is_some()
    }
}
