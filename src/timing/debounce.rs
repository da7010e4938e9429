//! Debouncing of rapid search input.
//!
//! A [`Debouncer`] owns at most one pending commit. Scheduling a new value
//! cancels the previous one, so a burst of inputs closer together than the
//! delay produces exactly one commit carrying the last value.

use super::scheduler::{Scheduler, TaskToken};
use std::time::Duration;

/// Coalesces values for one logical input stream.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(TaskToken, String)>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Quiet period before a value is committed.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value with `value` and restarts the quiet period.
    ///
    /// `task` is what the scheduler hands back when the period elapses; pass
    /// its token to [`Debouncer::commit`].
    pub fn schedule<T>(
        &mut self,
        value: impl Into<String>,
        scheduler: &mut Scheduler<T>,
        task: T,
    ) -> TaskToken {
        self.cancel(scheduler);
        let value = value.into();
        let token = scheduler.schedule(self.delay, task);
        tracing::trace!(value = %value, "debounce rescheduled");
        self.pending = Some((token, value));
        token
    }

    /// Takes the pending value if `token` is the one currently pending.
    ///
    /// Returns `None` for a superseded or unknown token.
    pub fn commit(&mut self, token: TaskToken) -> Option<String> {
        match self.pending.take() {
            Some((pending, value)) if pending == token => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Cancels the pending commit and yields an immediate empty commit.
    pub fn cancel_and_flush<T>(&mut self, scheduler: &mut Scheduler<T>) -> String {
        self.cancel(scheduler);
        String::new()
    }

    /// Cancels the pending commit, if any.
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some((token, _)) = self.pending.take() {
            scheduler.cancel(token);
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
