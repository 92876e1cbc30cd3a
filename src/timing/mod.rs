// SPDX-License-Identifier: MPL-2.0
//! Pluggable clock and one-shot scheduling for deferred UI work.
//!
//! Section commits and overlay disposals are modeled as independent one-shot
//! timers in a [`Scheduler`]. The controller reads time through a [`Clock`]
//! so tests can drive it with a [`ManualClock`] instead of the wall clock.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{Scheduler, TimerId};
