// SPDX-License-Identifier: MPL-2.0
//! One-shot timer queue.
//!
//! Timers are fire-and-forget: once scheduled they cannot be cancelled, and
//! each fires exactly once when [`Scheduler::drain_due`] is called with an
//! instant at or past its deadline. Timers with equal deadlines fire in the
//! order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    deadline: Instant,
    id: TimerId,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the earliest deadline first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Queue of pending one-shot timers carrying a payload.
#[derive(Debug)]
pub struct Scheduler<T> {
    pending: BinaryHeap<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            pending: BinaryHeap::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            deadline,
            id,
            payload,
        });
        id
    }

    /// Removes and returns every payload whose deadline is `<= now`, earliest
    /// first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|entry| entry.deadline <= now)
        {
            if let Some(entry) = self.pending.pop() {
                due.push(entry.payload);
            }
        }
        due
    }

    /// Deadline of the next timer to fire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.peek().map(|entry| entry.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
