//! The collection engine: one instance per attached collection.
//!
//! [`Engine`] owns everything a collection needs: the item snapshot, the
//! filter state, the visible set, the timer queue, the search debouncer, the
//! view synchronizer and the status channel. Nothing is shared between
//! engines.
//!
//! # Lifecycle
//!
//! ```text
//! attach ──▶ (command | advance)* ──▶ teardown
//! ```
//!
//! Commands go through [`handle_command`](super::handle_command). Time moves
//! only through [`Engine::advance`]; the host calls it from its event loop,
//! using [`Engine::next_deadline`] to know when the next timer is due.

use super::modes::Phase;
use crate::domain::{FilterState, ItemId};
use crate::query::visible_order;
use crate::store::ItemStore;
use crate::surface::Surface;
use crate::timing::{Debouncer, Scheduler, TaskToken};
use crate::view::{Announcement, AnnouncementChannel, ViewSynchronizer, ViewTask};
use crate::Config;
use std::time::Duration;

/// Delayed work owned by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    /// The search quiet period elapsed.
    SearchCommit,
    /// A per-item presentation change.
    View(ViewTask),
}

impl From<ViewTask> for TimerTask {
    fn from(task: ViewTask) -> Self {
        Self::View(task)
    }
}

/// A faceted collection attached to one presentation surface.
#[derive(Debug)]
pub struct Engine<S: Surface> {
    surface: S,
    store: ItemStore,
    filter: FilterState,
    visible: Vec<ItemId>,
    phase: Phase,
    scheduler: Scheduler<TimerTask>,
    search: Debouncer,
    synchronizer: ViewSynchronizer,
    announcer: AnnouncementChannel,
    torn_down: bool,
}

impl<S: Surface> Engine<S> {
    /// Attaches an engine to `surface`.
    ///
    /// Reads the item snapshot, installs transitions and starts `Idle` with
    /// every item visible in original order. An empty collection is logged
    /// and leaves the engine inert.
    ///
    /// # Example
    ///
    /// ```
    /// use faceted_collection::{Config, Engine, Phase};
    /// use faceted_collection::domain::ItemAttributes;
    /// use faceted_collection::surface::MemorySurface;
    ///
    /// let surface = MemorySurface::new(vec![ItemAttributes::default(); 3]);
    /// let engine = Engine::attach(surface, &Config::default());
    /// assert_eq!(engine.visible().len(), 3);
    /// assert_eq!(engine.phase(), Phase::Idle);
    /// ```
    pub fn attach(mut surface: S, config: &Config) -> Self {
        let _span = tracing::debug_span!("attach").entered();

        let store = ItemStore::load(&surface);
        let synchronizer = ViewSynchronizer::new(&store, config.settle(), config.stagger());

        if store.is_empty() {
            tracing::warn!("no cards found, collection stays inert");
        } else {
            synchronizer.prepare(&store, &mut surface);
            tracing::debug!(item_count = store.len(), "collection attached");
        }

        Self {
            visible: store.ids(),
            surface,
            store,
            filter: FilterState::default(),
            phase: Phase::Idle,
            scheduler: Scheduler::new(),
            search: Debouncer::new(config.debounce()),
            synchronizer,
            announcer: AnnouncementChannel::new(),
            torn_down: false,
        }
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Ordered ids of the visible set.
    #[must_use]
    pub fn visible(&self) -> &[ItemId] {
        &self.visible
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub const fn synchronizer(&self) -> &ViewSynchronizer {
        &self.synchronizer
    }

    /// Virtual time since attach.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Time until the next timer is due, if any is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Whether a search term is waiting out its quiet period.
    #[must_use]
    pub const fn has_pending_search(&self) -> bool {
        self.search.is_pending()
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether commands have anything to act on.
    pub(crate) fn is_active(&self) -> bool {
        !self.torn_down && !self.store.is_empty()
    }

    /// Advances the clock by `elapsed`, firing every timer that comes due.
    ///
    /// Does nothing after teardown.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.torn_down {
            return;
        }

        let until = self.scheduler.now() + elapsed;
        while let Some((token, task)) = self.scheduler.pop_due(until) {
            self.on_timer(token, task);
        }
        self.scheduler.advance_to(until);
    }

    /// Runs every pending timer to completion.
    pub fn settle(&mut self) {
        while let Some(deadline) = self.next_deadline() {
            self.advance(deadline);
        }
    }

    fn on_timer(&mut self, token: TaskToken, task: TimerTask) {
        match task {
            TimerTask::SearchCommit => {
                if let Some(term) = self.search.commit(token) {
                    self.commit_search(&term);
                }
            }
            TimerTask::View(task) => {
                self.synchronizer
                    .on_fired(token, &task, &self.store, &mut self.surface);
                if self.phase == Phase::Settling && self.synchronizer.pending() == 0 {
                    tracing::debug!("view settled");
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Updates the filter with `update` and reruns the pipeline if it changed.
    ///
    /// Returns whether the pipeline ran.
    pub(crate) fn update_filter(&mut self, update: impl FnOnce(&mut FilterState)) -> bool {
        let before = self.filter.clone();
        update(&mut self.filter);
        if self.filter == before {
            tracing::debug!("filter unchanged, skipping recompute");
            return false;
        }
        self.run_pipeline();
        true
    }

    /// Predicate, sort, reconcile.
    fn run_pipeline(&mut self) {
        let _span = tracing::debug_span!(
            "pipeline",
            category = %self.filter.category,
            search_len = self.filter.search_term.len(),
            sort_key = %self.filter.sort_key
        )
        .entered();

        self.phase = Phase::Recomputing;
        let next = visible_order(&self.store, &self.filter);

        self.phase = Phase::Settling;
        self.synchronizer.reconcile(
            &self.visible,
            &next,
            &self.store,
            &mut self.surface,
            &mut self.scheduler,
        );
        self.visible = next;

        if self.synchronizer.pending() == 0 {
            self.phase = Phase::Idle;
        }

        tracing::debug!(visible_count = self.visible.len(), phase = ?self.phase, "pipeline complete");
    }

    /// Queues a search term behind the debounce quiet period.
    pub(crate) fn schedule_search(&mut self, raw: &str) {
        self.search
            .schedule(raw, &mut self.scheduler, TimerTask::SearchCommit);
    }

    /// Drops any pending search term and commits an empty one immediately.
    pub(crate) fn flush_search(&mut self) {
        let term = self.search.cancel_and_flush(&mut self.scheduler);
        self.commit_search(&term);
    }

    fn commit_search(&mut self, raw: &str) {
        let term = raw.trim().to_string();
        tracing::debug!(term = %term, "search committed");

        let committed = term.clone();
        self.update_filter(move |filter| filter.search_term = committed);

        let announcement = if term.is_empty() {
            Announcement::SearchCleared
        } else {
            Announcement::SearchResults {
                term,
                count: self.visible.len(),
            }
        };
        self.announce(&announcement);
    }

    /// Writes `announcement` to the status region, if the surface has one.
    pub(crate) fn announce(&mut self, announcement: &Announcement) {
        self.announcer
            .announce(&announcement.to_string(), &mut self.surface);
    }

    /// Mutable access to the surface, e.g. to drain a recording surface's log.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Cancels every timer, restores the surface baseline and removes the
    /// status region. Idempotent; the engine ignores everything afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let _span = tracing::debug_span!("teardown").entered();

        self.search.cancel(&mut self.scheduler);
        self.synchronizer
            .teardown(&self.store, &mut self.surface, &mut self.scheduler);
        let dropped = self.scheduler.cancel_all();
        self.announcer.close(&mut self.surface);

        self.phase = Phase::Idle;
        self.torn_down = true;
        tracing::debug!(dropped_timers = dropped, "collection torn down");
    }

    /// Consumes the engine, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
