// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Initialized" notifications.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chronoline_settings::{Orientation, Settings};

/// Emitted after each instance finishes a setup pass.
///
/// The instance's navigation API is available through
/// [`Timeline::api`](crate::Timeline::api) with [`Initialized::id`].
#[derive(Clone, Debug)]
pub struct Initialized<E> {
    /// Instance id, also the registry key.
    pub id: String,
    /// Container element.
    pub container: E,
    /// Resolved settings.
    pub settings: Settings,
    /// Layout chosen by this pass.
    pub orientation: Orientation,
    /// Setup pass counter for this instance, starting at 1.
    pub generation: u64,
}

/// Identifies a subscription for [`EventBus::unsubscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&Initialized<E>)>;

/// Subscribers to [`Initialized`], per container and global.
///
/// For each event, subscribers of the event's container run first, then
/// global subscribers, each group in subscription order.
pub struct EventBus<E> {
    scoped: Vec<(SubscriptionId, E, Listener<E>)>,
    global: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("scoped", &self.scoped.len())
            .field("global", &self.global.len())
            .finish_non_exhaustive()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            scoped: Vec::new(),
            global: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E: Copy + PartialEq> EventBus<E> {
    /// Subscribes to events of one container.
    pub fn subscribe(
        &mut self,
        container: E,
        listener: impl FnMut(&Initialized<E>) + 'static,
    ) -> SubscriptionId {
        let id = self.next();
        self.scoped.push((id, container, Box::new(listener)));
        id
    }

    /// Subscribes to events of every container.
    pub fn subscribe_global(
        &mut self,
        listener: impl FnMut(&Initialized<E>) + 'static,
    ) -> SubscriptionId {
        let id = self.next();
        self.global.push((id, Box::new(listener)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.scoped.len() + self.global.len();
        self.scoped.retain(|(s, _, _)| *s != id);
        self.global.retain(|(s, _)| *s != id);
        before != self.scoped.len() + self.global.len()
    }

    /// Delivers an event.
    pub fn emit(&mut self, event: &Initialized<E>) {
        for (_, container, listener) in &mut self.scoped {
            if *container == event.container {
                listener(event);
            }
        }
        for (_, listener) in &mut self.global {
            listener(event);
        }
    }

    fn next(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }
}
