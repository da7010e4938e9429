//! Command handling: the orchestrator between interactions and the pipeline.
//!
//! # Architecture
//!
//! ```text
//! Command ──▶ handle_command ──▶ FilterState ──▶ Predicate ▶ Sort ▶ Reconcile ▶ Announce
//!                  │
//!                  └─ SetSearchTerm ──▶ Debouncer ──(quiet period)──▶ FilterState ...
//! ```
//!
//! Category and sort commands run the pipeline synchronously. Search input is
//! debounced and committed later from [`Engine::advance`]; `ClearSearch`
//! commits an empty term at once.
//!
//! Every command is idempotent: selecting the active category or sort leaves
//! the visible set untouched but still re-announces it.

use super::engine::Engine;
use crate::domain::SortKey;
use crate::surface::{ControlGroup, Surface};
use crate::view::Announcement;

/// Interactions a collection responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Restricts the collection to one category token (`"all"` lifts it).
    SelectCategory(String),
    /// Orders the collection by a sort key.
    SelectSort(SortKey),
    /// Raw search input; committed after the debounce quiet period.
    SetSearchTerm(String),
    /// Drops pending search input and clears the term immediately.
    ClearSearch,
    /// Cancels all timers and restores the surface.
    Teardown,
}

/// Applies `command` to `engine`.
///
/// Returns `true` if the visible set was recomputed. Commands on an empty or
/// torn-down collection are ignored.
///
/// # Example
///
/// ```
/// use faceted_collection::{handle_command, Command, Config, Engine};
/// use faceted_collection::domain::ItemAttributes;
/// use faceted_collection::surface::MemorySurface;
///
/// let surface = MemorySurface::new(vec![
///     ItemAttributes { category: Some("news".into()), ..Default::default() },
///     ItemAttributes { category: Some("events".into()), ..Default::default() },
/// ]);
/// let mut engine = Engine::attach(surface, &Config::default());
///
/// assert!(handle_command(&mut engine, &Command::SelectCategory("news".into())));
/// assert_eq!(engine.visible().len(), 1);
/// assert_eq!(
///     engine.surface().status_text(),
///     Some("Filtered by news. Showing 1 card.")
/// );
/// ```
pub fn handle_command<S: Surface>(engine: &mut Engine<S>, command: &Command) -> bool {
    let _span = tracing::debug_span!("handle_command", command = ?command).entered();

    if let Command::Teardown = command {
        engine.teardown();
        return false;
    }

    if !engine.is_active() {
        tracing::debug!(
            torn_down = engine.is_torn_down(),
            "collection inactive, ignoring command"
        );
        return false;
    }

    match command {
        Command::SelectCategory(category) => {
            engine
                .surface_mut()
                .mark_active_control(ControlGroup::Category, category);

            let selected = category.clone();
            let recomputed = engine.update_filter(move |filter| filter.category = selected);

            engine.announce(&Announcement::CategoryChanged {
                category: category.clone(),
                count: engine.visible().len(),
            });
            recomputed
        }
        Command::SelectSort(key) => {
            engine
                .surface_mut()
                .mark_active_control(ControlGroup::Sort, key.token());

            let key = *key;
            let recomputed = engine.update_filter(|filter| filter.sort_key = key);

            engine.announce(&Announcement::SortChanged(key));
            recomputed
        }
        Command::SetSearchTerm(raw) => {
            tracing::trace!(raw = %raw, "search input");
            engine.schedule_search(raw);
            false
        }
        Command::ClearSearch => {
            let before = engine.filter().search_term.is_empty();
            engine.flush_search();
            !before
        }
        Command::Teardown => false,
    }
}

impl<S: Surface> Engine<S> {
    /// Selects a category token.
    pub fn select_category(&mut self, category: impl Into<String>) -> bool {
        handle_command(self, &Command::SelectCategory(category.into()))
    }

    /// Selects a sort key.
    pub fn select_sort(&mut self, key: SortKey) -> bool {
        handle_command(self, &Command::SelectSort(key))
    }

    /// Feeds raw search input.
    pub fn set_search_term(&mut self, raw: impl Into<String>) {
        handle_command(self, &Command::SetSearchTerm(raw.into()));
    }

    /// Clears the search term immediately.
    pub fn clear_search(&mut self) -> bool {
        handle_command(self, &Command::ClearSearch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;
    use crate::domain::{ItemAttributes, ItemId};
    use crate::surface::MemorySurface;
    use crate::Config;
    use std::time::Duration;

    fn engine() -> Engine<MemorySurface> {
        let attrs = vec![
            ItemAttributes {
                id: Some("1".into()),
                category: Some("news".into()),
                title: Some("Beta".into()),
                date: Some("2024-01-01".into()),
                popularity: Some("5".into()),
                ..Default::default()
            },
            ItemAttributes {
                id: Some("2".into()),
                category: Some("events".into()),
                title: Some("Alpha".into()),
                date: Some("2024-06-01".into()),
                popularity: Some("10".into()),
                ..Default::default()
            },
        ];
        Engine::attach(MemorySurface::new(attrs), &Config::default())
    }

    fn ids(engine: &Engine<MemorySurface>) -> Vec<&str> {
        engine.visible().iter().map(ItemId::as_str).collect()
    }

    #[test]
    fn test_category_selection_marks_control() {
        let mut engine = engine();
        engine.select_category("events");
        assert_eq!(ids(&engine), vec!["2"]);
        assert_eq!(
            engine.surface().active_control(ControlGroup::Category),
            Some("events")
        );
    }

    #[test]
    fn test_repeated_selection_reannounces_without_recompute() {
        let mut engine = engine();
        assert!(engine.select_sort(SortKey::Title));
        engine.settle();
        assert!(!engine.select_sort(SortKey::Title));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.surface().status_text(), Some("Cards sorted by title."));
    }

    #[test]
    fn test_search_waits_for_quiet_period() {
        let mut engine = engine();
        engine.set_search_term("alp");
        assert_eq!(ids(&engine), vec!["1", "2"]);
        assert!(engine.has_pending_search());

        engine.advance(Duration::from_millis(299));
        assert_eq!(engine.filter().search_term, "");

        engine.advance(Duration::from_millis(1));
        assert_eq!(ids(&engine), vec!["2"]);
        assert_eq!(
            engine.surface().status_text(),
            Some("Search for \"alp\" found 1 result.")
        );
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let mut engine = engine();
        engine.set_search_term("  beta ");
        engine.settle();
        assert_eq!(engine.filter().search_term, "beta");
        assert_eq!(ids(&engine), vec!["1"]);
    }

    #[test]
    fn test_clear_search_is_immediate() {
        let mut engine = engine();
        engine.set_search_term("alpha");
        engine.settle();
        assert_eq!(ids(&engine), vec!["2"]);

        engine.set_search_term("alph");
        assert!(engine.clear_search());
        assert!(!engine.has_pending_search());
        assert_eq!(ids(&engine), vec!["1", "2"]);
        assert_eq!(
            engine.surface().status_text(),
            Some("Search cleared. Showing all cards.")
        );
    }

    #[test]
    fn test_phase_settles_back_to_idle() {
        let mut engine = engine();
        engine.select_category("news");
        assert_eq!(engine.phase(), Phase::Settling);
        engine.settle();
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_collection_ignores_commands() {
        let mut engine = Engine::attach(MemorySurface::new(vec![]), &Config::default());
        assert!(!engine.select_category("news"));
        engine.set_search_term("x");
        assert!(!engine.has_pending_search());
        assert_eq!(engine.surface().status_text(), None);
        assert!(engine.surface().ops().is_empty());
    }

    #[test]
    fn test_teardown_command() {
        let mut engine = engine();
        assert!(!handle_command(&mut engine, &Command::Teardown));
        assert!(engine.is_torn_down());
        assert!(!engine.select_category("news"));
    }
}
