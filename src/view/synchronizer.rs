//! Reconciliation of the visible set against the presentation surface.
//!
//! Each pipeline run hands the previous and next visible orders to
//! [`ViewSynchronizer::reconcile`], which:
//!
//! 1. starts the hide transition for departing items and schedules their
//!    settle (removal from layout) after the transition duration
//! 2. reorders the surface so visible items appear in exactly the next order
//! 3. schedules a staggered reveal for every visible item, `index * stagger`
//!    after the pass, so entrance runs in final order
//!
//! Every timer is tracked per item. Before an item gets a new timer its
//! previous one is cancelled, so a timer from a superseded pass can never
//! fire. An item that reappears while still hiding has its settle cancelled
//! and is revealed from where it is; an item that keeps departing keeps its
//! original settle.

use crate::domain::ItemId;
use crate::store::ItemStore;
use crate::surface::Surface;
use crate::timing::{Scheduler, TaskToken};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Delayed per-item presentation change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTask {
    /// The hide transition has finished; remove the item from layout.
    Settle(ItemId),
    /// Staggered reveal of a visible item.
    Reveal(ItemId),
}

/// Presentation phase of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// Fully visible, no timer pending.
    Shown,
    /// Visible and in layout, reveal pending.
    Revealing,
    /// Hide transition running, settle pending.
    Hiding,
    /// Out of layout.
    Hidden,
}

/// Reconciles visible-set snapshots against a surface.
#[derive(Debug)]
pub struct ViewSynchronizer {
    settle: Duration,
    stagger: Duration,
    phases: HashMap<ItemId, ItemPhase>,
    timers: HashMap<ItemId, TaskToken>,
}

impl ViewSynchronizer {
    /// Creates a synchronizer for `store` with every item shown.
    #[must_use]
    pub fn new(store: &ItemStore, settle: Duration, stagger: Duration) -> Self {
        let phases = store
            .items()
            .iter()
            .map(|item| (item.id.clone(), ItemPhase::Shown))
            .collect();

        Self {
            settle,
            stagger,
            phases,
            timers: HashMap::new(),
        }
    }

    /// Installs the transition on every element of `store`.
    pub fn prepare<S: Surface + ?Sized>(&self, store: &ItemStore, surface: &mut S) {
        for slot in 0..store.len() {
            surface.prepare_transition(slot, self.settle);
        }
    }

    /// Reconciles `previous` against `next` on `surface`.
    ///
    /// Ids missing from `store` are ignored.
    pub fn reconcile<T, S>(
        &mut self,
        previous: &[ItemId],
        next: &[ItemId],
        store: &ItemStore,
        surface: &mut S,
        scheduler: &mut Scheduler<T>,
    ) where
        T: From<ViewTask>,
        S: Surface + ?Sized,
    {
        let next_set: HashSet<&ItemId> = next.iter().collect();
        let departing: Vec<&ItemId> = previous.iter().filter(|id| !next_set.contains(id)).collect();

        let _span = tracing::debug_span!(
            "reconcile",
            previous = previous.len(),
            next = next.len(),
            departing = departing.len()
        )
        .entered();

        for id in departing {
            let Some(slot) = store.slot_of(id) else {
                continue;
            };
            self.cancel_timer(id, scheduler);
            surface.begin_hide(slot);
            self.phases.insert(id.clone(), ItemPhase::Hiding);
            let token = scheduler.schedule(self.settle, ViewTask::Settle(id.clone()).into());
            self.timers.insert(id.clone(), token);
        }

        let slots: Vec<usize> = next.iter().filter_map(|id| store.slot_of(id)).collect();
        surface.reorder(&slots);

        let mut delay = Duration::ZERO;
        for id in next {
            let Some(slot) = store.slot_of(id) else {
                continue;
            };
            self.cancel_timer(id, scheduler);
            if self.phase(id) == Some(ItemPhase::Hidden) {
                surface.set_displayed(slot, true);
            }
            self.phases.insert(id.clone(), ItemPhase::Revealing);
            let token = scheduler.schedule(delay, ViewTask::Reveal(id.clone()).into());
            self.timers.insert(id.clone(), token);
            delay += self.stagger;
        }

        tracing::debug!(pending_timers = self.timers.len(), "reconcile scheduled");
    }

    /// Applies a fired task if `token` is still the item's live timer.
    ///
    /// Returns `false` for a superseded task, which is dropped.
    pub fn on_fired<S: Surface + ?Sized>(
        &mut self,
        token: TaskToken,
        task: &ViewTask,
        store: &ItemStore,
        surface: &mut S,
    ) -> bool {
        let id = match task {
            ViewTask::Settle(id) | ViewTask::Reveal(id) => id,
        };

        if self.timers.get(id) != Some(&token) {
            tracing::trace!(id = %id, "stale view task dropped");
            return false;
        }
        self.timers.remove(id);

        let Some(slot) = store.slot_of(id) else {
            return false;
        };

        match task {
            ViewTask::Settle(_) => {
                surface.set_displayed(slot, false);
                self.phases.insert(id.clone(), ItemPhase::Hidden);
            }
            ViewTask::Reveal(_) => {
                surface.reveal(slot);
                self.phases.insert(id.clone(), ItemPhase::Shown);
            }
        }
        true
    }

    /// Cancels every tracked timer and restores all elements to baseline.
    pub fn teardown<T, S: Surface + ?Sized>(
        &mut self,
        store: &ItemStore,
        surface: &mut S,
        scheduler: &mut Scheduler<T>,
    ) {
        for (_, token) in self.timers.drain() {
            scheduler.cancel(token);
        }
        for slot in 0..store.len() {
            surface.reset(slot);
        }
        self.phases.clear();
    }

    #[must_use]
    pub fn phase(&self, id: &ItemId) -> Option<ItemPhase> {
        self.phases.get(id).copied()
    }

    /// Number of live per-item timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn cancel_timer<T>(&mut self, id: &ItemId, scheduler: &mut Scheduler<T>) {
        if let Some(token) = self.timers.remove(id) {
            scheduler.cancel(token);
        }
    }
}
