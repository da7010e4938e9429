//! Attach-once registry of collection instances.
//!
//! A host page may carry several collections. Each is attached at most once
//! under a host-chosen key; a second attach for the same key is a no-op, so
//! repeated initialization passes never stack timers or status regions.

use super::engine::Engine;
use crate::surface::Surface;
use crate::Config;
use std::collections::BTreeMap;
use std::time::Duration;

/// Every attached collection, keyed by host identity.
#[derive(Debug)]
pub struct CollectionRegistry<S: Surface> {
    config: Config,
    engines: BTreeMap<String, Engine<S>>,
}

impl<S: Surface> CollectionRegistry<S> {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            engines: BTreeMap::new(),
        }
    }

    /// Attaches `surface` under `key` unless a collection is already attached
    /// there. Returns `false` and drops `surface` when the key is taken.
    pub fn attach(&mut self, key: impl Into<String>, surface: S) -> bool {
        let key = key.into();
        if self.engines.contains_key(&key) {
            tracing::debug!(key = %key, "collection already attached, skipping");
            return false;
        }

        let engine = Engine::attach(surface, &self.config);
        tracing::debug!(key = %key, items = engine.store().len(), "collection registered");
        self.engines.insert(key, engine);
        true
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Engine<S>> {
        self.engines.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Engine<S>> {
        self.engines.get_mut(key)
    }

    /// Tears down and removes the collection under `key`, returning its
    /// surface.
    pub fn detach(&mut self, key: &str) -> Option<S> {
        let mut engine = self.engines.remove(key)?;
        engine.teardown();
        tracing::debug!(key = %key, "collection detached");
        Some(engine.into_surface())
    }

    /// Advances every collection's clock by `elapsed`.
    pub fn advance_all(&mut self, elapsed: Duration) {
        for engine in self.engines.values_mut() {
            engine.advance(elapsed);
        }
    }

    /// Earliest pending deadline across all collections.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.engines.values().filter_map(Engine::next_deadline).min()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
