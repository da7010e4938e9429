//! Cancellable delayed tasks on a cooperative virtual clock.
//!
//! The engine is single-threaded: nothing here sleeps or spawns. A host event
//! loop moves the clock forward (see `Engine::advance`), and every task whose
//! deadline has been reached is handed back in deadline order. Tasks due at the
//! same instant come back in the order they were scheduled.
//!
//! Scheduling returns a [`TaskToken`]. Cancelling a token is idempotent, and a
//! cancelled task is never returned, so a component that always cancels its
//! previous token before scheduling a new one cannot observe a stale callback.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

/// Pending tasks keyed by deadline, plus the current virtual time.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from scheduler creation.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `task` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskToken {
        let seq = self.next_seq;
        self.next_seq += 1;

        let due = self.now + delay;
        self.queue.insert((due, seq), task);
        self.deadlines.insert(seq, due);

        tracing::trace!(token = seq, due = ?due, "task scheduled");
        TaskToken(seq)
    }

    /// Cancels a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let Some(due) = self.deadlines.remove(&token.0) else {
            return false;
        };
        self.queue.remove(&(due, token.0));
        tracing::trace!(token = token.0, "task cancelled");
        true
    }

    /// Cancels every pending task, returning how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        self.deadlines.clear();
        count
    }

    #[must_use]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.deadlines.contains_key(&token.0)
    }

    /// Time until the earliest pending task is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .keys()
            .next()
            .map(|(due, _)| due.saturating_sub(self.now))
    }

    /// Removes and returns the earliest task due at or before `until`.
    ///
    /// The clock moves to that task's deadline, so tasks scheduled while
    /// handling it are timed relative to when it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskToken, T)> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }

        let task = self.queue.remove(&(due, seq))?;
        self.deadlines.remove(&seq);
        self.now = self.now.max(due);
        Some((TaskToken(seq), task))
    }

    /// Moves the clock forward to `time` without firing anything.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
