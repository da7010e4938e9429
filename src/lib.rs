//! Faceted Collection: category filters, debounced search and multi-key sort
//! over a collection of cards, with animated, accessible view updates.
//!
//! The crate provides:
//! - Single-category filtering with an "all" sentinel
//! - Case-insensitive substring search behind a quiet-period debounce
//! - Sorting by title, newest date or highest popularity (stable)
//! - Staggered reveal and delayed settle of items leaving the view, with every
//!   superseded timer cancelled
//! - A single live status region announcing each change

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (page script, CLI in main.rs, tests)          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Engine + phases
//! │  - Command handling                                 │
//! │  - Pipeline orchestration                           │
//! │  - Attach-once registry                             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ View Layer    │   │ Timing Layer  │
//! │ (query/)      │   │ (view/)       │   │ (timing/)     │
//! │ - Predicate   │   │ - Reconcile   │   │ - Scheduler   │
//! │ - Sort        │   │ - Announce    │   │ - Debounce    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Store, Surface & Domain Layers                     │
//! │  - Item snapshot (store/)                           │
//! │  - Presentation surface trait (surface/)            │
//! │  - Items, filter state, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber with env filter               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Engine, commands, phases, registry, scripts
//! - [`domain`]: Items, filter state, sort keys, errors
//! - [`store`]: Immutable item snapshot read at attach
//! - [`query`]: Predicate construction and stable sorting
//! - [`timing`]: Cooperative timer queue and debouncer
//! - [`surface`]: Presentation surface trait and in-memory surface
//! - [`view`]: View synchronizer and status announcements
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! Timings come from [`Config`], either a string map supplied by the host or
//! a TOML file:
//!
//! ```toml
//! debounce_ms = 300
//! settle_ms = 300
//! stagger_ms = 50
//! trace_level = "debug"
//! ```
//!
//! # Time
//!
//! Engines never sleep or spawn. Every delay is a task on the engine's own
//! virtual clock, fired from [`Engine::advance`]. Hosts call it from their
//! event loop; tests call it with exact durations.
//!
//! # Example
//!
//! ```rust
//! use faceted_collection::{attach, Config, SortKey};
//! use faceted_collection::domain::ItemAttributes;
//! use faceted_collection::surface::MemorySurface;
//! use std::time::Duration;
//!
//! let items = vec![
//!     ItemAttributes { title: Some("Beta".into()), ..Default::default() },
//!     ItemAttributes { title: Some("Alpha".into()), ..Default::default() },
//! ];
//! let mut engine = attach(MemorySurface::new(items), &Config::default());
//!
//! engine.select_sort(SortKey::Title);
//! engine.set_search_term("alp");
//! engine.advance(Duration::from_millis(300));
//!
//! assert_eq!(engine.visible().len(), 1);
//! assert_eq!(
//!     engine.surface().status_text(),
//!     Some("Search for \"alp\" found 1 result.")
//! );
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod query;
pub mod store;
pub mod surface;
pub mod timing;
pub mod view;

pub use app::{handle_command, CollectionRegistry, Command, Engine, Phase};
pub use domain::{CollectionError, FilterState, Result, SortKey};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_SETTLE_MS: u64 = 300;
const DEFAULT_STAGGER_MS: u64 = 50;

/// Engine timing and tracing configuration.
///
/// # Example
///
/// ```rust
/// use faceted_collection::Config;
/// use std::time::Duration;
///
/// let config = Config::default();
/// assert_eq!(config.debounce(), Duration::from_millis(300));
/// assert_eq!(config.stagger(), Duration::from_millis(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before search input is committed. Default: 300
    pub debounce_ms: u64,

    /// Delay between an item starting to hide and leaving layout; also the
    /// transition duration installed at attach. Default: 300
    pub settle_ms: u64,

    /// Reveal delay added per position in the new visible order. Default: 50
    pub stagger_ms: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// # Parsing Rules
    ///
    /// - `debounce_ms`, `settle_ms`, `stagger_ms`: String → `u64` (falls back
    ///   to the default on parse error)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use faceted_collection::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("stagger_ms".to_string(), "20".to_string());
    /// map.insert("settle_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.stagger_ms, 20);
    /// assert_eq!(config.settle_ms, 300);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let millis = |key: &str, default: u64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            debounce_ms: millis("debounce_ms", DEFAULT_DEBOUNCE_MS),
            settle_ms: millis("settle_ms", DEFAULT_SETTLE_MS),
            stagger_ms: millis("stagger_ms", DEFAULT_STAGGER_MS),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Toml`] if `source` is not valid TOML or a
    /// value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Io`] if the file cannot be read, or
    /// [`CollectionError::Toml`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    #[must_use]
    pub const fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

/// Attaches a collection engine to `surface`.
///
/// Shorthand for [`Engine::attach`].
pub fn attach<S: surface::Surface>(surface: S, config: &Config) -> Engine<S> {
    tracing::debug!(
        debounce_ms = config.debounce_ms,
        settle_ms = config.settle_ms,
        stagger_ms = config.stagger_ms,
        "attaching collection"
    );
    Engine::attach(surface, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_map_defaults_when_empty() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_from_map_reads_every_key() {
        let map: BTreeMap<String, String> = [
            ("debounce_ms", "120"),
            ("settle_ms", " 200 "),
            ("stagger_ms", "10"),
            ("trace_level", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.debounce(), Duration::from_millis(120));
        assert_eq!(config.settle(), Duration::from_millis(200));
        assert_eq!(config.stagger(), Duration::from_millis(10));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml_str("stagger_ms = 0\n").unwrap();
        assert_eq!(config.stagger_ms, 0);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn test_from_toml_rejects_wrong_types() {
        let err = Config::from_toml_str("debounce_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, CollectionError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debounce_ms = 150\ntrace_level = \"trace\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.trace_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CollectionError::Io(_)));
    }
}
