// SPDX-License-Identifier: MPL-2.0
//! Single-threaded timer queue driven by a virtual clock.
//!
//! Interaction controllers never sleep. They hand delayed continuations to a
//! [`Scheduler`], and the embedder advances time explicitly. Timers fire in
//! deadline order, ties in the order they were scheduled, and each fired
//! task observes the clock set to its own deadline.
//!
//! There is no cancellation. Controllers that need "restart the timer"
//! semantics tag their tasks with a generation counter and ignore stale ones.
//!
//! # Example
//!
//! ```
//! use folio::scheduler::Scheduler;
//! use std::time::Duration;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(Duration::from_millis(300), "hide");
//! scheduler.schedule(Duration::from_millis(100), "restore");
//!
//! let until = Duration::from_millis(350);
//! assert_eq!(scheduler.pop_due(until), Some("restore"));
//! assert_eq!(scheduler.pop_due(until), Some("hide"));
//! assert_eq!(scheduler.pop_due(until), None);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    deadline: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the earliest deadline first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deadline-ordered queue of pending tasks with its own clock.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Entry<T>>,
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let entry = Entry {
            deadline: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }

    /// Number of tasks not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.deadline)
    }

    /// Removes the earliest task due at or before `until` and moves the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        if self.next_deadline()? > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.deadline);
        Some(entry.task)
    }

    /// Moves the clock forward to `to` without firing anything.
    ///
    /// Call after draining [`Scheduler::pop_due`] for the same instant.
    pub fn settle(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-edge throttle over the virtual clock.
///
/// The first call passes and opens a window of `limit`; calls inside the
/// window are dropped, not deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    limit: Duration,
    closed_until: Option<Duration>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            closed_until: None,
        }
    }

    /// Returns `true` if a call made at `now` should run.
    pub fn try_pass(&mut self, now: Duration) -> bool {
        if self.closed_until.is_some_and(|until| now < until) {
            return false;
        }
        self.closed_until = Some(now + self.limit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(400), 'a');
        scheduler.schedule(ms(100), 'b');
        scheduler.schedule(ms(300), 'c');

        let mut fired = Vec::new();
        while let Some(task) = scheduler.pop_due(ms(1000)) {
            fired.push(task);
        }
        assert_eq!(fired, vec!['b', 'c', 'a']);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), 1);
        scheduler.schedule(ms(100), 2);
        scheduler.schedule(ms(100), 3);

        assert_eq!(scheduler.pop_due(ms(100)), Some(1));
        assert_eq!(scheduler.pop_due(ms(100)), Some(2));
        assert_eq!(scheduler.pop_due(ms(100)), Some(3));
    }

    #[test]
    fn tasks_not_yet_due_stay_queued() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(400), ());
        assert_eq!(scheduler.pop_due(ms(399)), None);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.pop_due(ms(400)), Some(()));
    }

    #[test]
    fn clock_moves_to_fired_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(150), ());
        scheduler.pop_due(ms(1000));
        assert_eq!(scheduler.now(), ms(150));

        // Follow-up tasks are relative to the deadline that fired.
        scheduler.schedule(ms(150), ());
        assert_eq!(scheduler.next_deadline(), Some(ms(300)));
    }

    #[test]
    fn settle_never_moves_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.settle(ms(500));
        scheduler.settle(ms(200));
        assert_eq!(scheduler.now(), ms(500));
    }

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(ms(100));
        assert!(throttle.try_pass(ms(0)));
        assert!(!throttle.try_pass(ms(50)));
        assert!(!throttle.try_pass(ms(99)));
        assert!(throttle.try_pass(ms(100)));
    }
}
