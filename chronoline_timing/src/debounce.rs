// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce helper over a [`TimerQueue`].
//!
//! ## Usage
//!
//! 1) Call [`Debouncer::trigger`] for every raw input event. Any previously
//!    pending timer is cancelled and a new one is scheduled `delay` ms later.
//! 2) When [`TimerQueue::poll`] yields a timer, pass its id to
//!    [`Debouncer::fired`]; it returns `true` when that timer belonged to this
//!    debouncer and clears the pending slot.
//! 3) Call [`Debouncer::cancel`] during teardown so nothing fires afterwards.

use crate::{TimerId, TimerQueue};

/// Restart-on-trigger timer owned by a single logical input source.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: u64,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period in milliseconds.
    #[must_use]
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// Restarts the quiet period, cancelling any timer still pending.
    pub fn trigger<T>(&mut self, queue: &mut TimerQueue<T>, now: u64, payload: T) -> TimerId {
        if let Some(id) = self.pending.take() {
            queue.cancel(id);
        }
        let id = queue.schedule(now, self.delay, payload);
        self.pending = Some(id);
        id
    }

    /// Marks `id` as fired. Returns `true` if it was this debouncer's timer.
    pub fn fired(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancels the pending timer, if any. Returns `true` if one was cancelled.
    pub fn cancel<T>(&mut self, queue: &mut TimerQueue<T>) -> bool {
        match self.pending.take() {
            Some(id) => queue.cancel(id).is_some(),
            None => false,
        }
    }

    /// Returns `true` while a timer is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
