// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timer queue keyed by [`TimerId`].

use alloc::vec::Vec;

/// Identifier of a scheduled timer.
///
/// Identifiers are never reused by the queue that issued them, so a stale id
/// can be cancelled safely: it simply no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// Queue of one-shot timers driven by host-supplied time.
///
/// Times are plain `u64` milliseconds. The queue never reads a clock itself;
/// the host calls [`TimerQueue::poll`] with the current time and receives the
/// payloads of every timer whose deadline has passed, in deadline order
/// (ties resolved by scheduling order).
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedules `payload` to fire `delay` milliseconds after `now`.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: now.saturating_add(delay),
            payload,
        });
        id
    }

    /// Cancels a pending timer, returning its payload if it was still queued.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).payload)
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts with a real event loop use this to arm a single native timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Removes and returns every timer due at `now`.
    pub fn poll(&mut self, now: u64) -> Vec<(TimerId, T)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter().map(|e| (e.id, e.payload)).collect()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::TimerQueue;

    #[test]
    fn poll_returns_due_timers_in_deadline_order() {
        let mut q = TimerQueue::new();
        let late = q.schedule(0, 500, "late");
        let early = q.schedule(0, 100, "early");
        let _future = q.schedule(0, 1_000, "future");

        let fired = q.poll(600);
        assert_eq!(fired, vec![(early, "early"), (late, "late")]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(1_000));
    }

    #[test]
    fn cancel_removes_pending_timer_only_once() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10, 10, 7_u32);
        assert!(q.is_pending(id));
        assert_eq!(q.cancel(id), Some(7));
        assert_eq!(q.cancel(id), None);
        assert!(q.poll(1_000).is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut q = TimerQueue::new();
        let a = q.schedule(0, 1, ());
        q.clear();
        let b = q.schedule(0, 1, ());
        assert_ne!(a, b);
        assert!(!q.is_pending(a));
    }

    #[test]
    fn deadline_saturates_instead_of_overflowing() {
        let mut q = TimerQueue::new();
        q.schedule(u64::MAX - 1, 10, ());
        assert_eq!(q.next_deadline(), Some(u64::MAX));
    }
}
