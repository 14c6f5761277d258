// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoline Timing: host-agnostic timer queue primitives.
//!
//! UI runtimes differ wildly in how they expose time: browsers hand out
//! `setTimeout` handles, native event loops have their own timer sources, and
//! tests want to drive time by hand. This crate does not talk to any of them.
//! Instead the host supplies "now" as a monotonically increasing millisecond
//! counter and asks the queue which timers are due.
//!
//! - [`TimerQueue`]: a small queue of one-shot timers carrying a caller-chosen
//!   payload. Timers can be cancelled by [`TimerId`] at any point before they fire.
//! - [`Debouncer`]: the "restart on every trigger" pattern layered on top of a
//!   [`TimerQueue`], used for resize handling and similar bursty inputs.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoline_timing::{Debouncer, TimerQueue};
//!
//! #[derive(Debug, PartialEq)]
//! enum Job {
//!     Relayout,
//! }
//!
//! let mut queue = TimerQueue::new();
//! let mut resize = Debouncer::new(250);
//!
//! // A burst of resize events only keeps the last one alive.
//! resize.trigger(&mut queue, 0, Job::Relayout);
//! resize.trigger(&mut queue, 100, Job::Relayout);
//! assert_eq!(queue.len(), 1);
//!
//! // Nothing is due until 250 ms after the last trigger.
//! assert!(queue.poll(300).is_empty());
//! let fired = queue.poll(350);
//! assert_eq!(fired.len(), 1);
//! assert!(resize.fired(fired[0].0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;

pub use debounce::Debouncer;
pub use queue::{TimerId, TimerQueue};
