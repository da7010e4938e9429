//! Shared test utilities for integration tests
#![allow(dead_code)]

use faceted_collection::domain::ItemAttributes;
use faceted_collection::surface::MemorySurface;
use faceted_collection::{Config, Engine};

/// Builder for one card's raw attributes
#[derive(Default, Clone)]
pub struct CardBuilder {
    attrs: ItemAttributes,
}

impl CardBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            attrs: ItemAttributes {
                id: Some(id.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.attrs.category = Some(category.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.attrs.title = Some(title.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.attrs.text = Some(text.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.attrs.date = Some(date.to_string());
        self
    }

    pub fn popularity(mut self, popularity: i64) -> Self {
        self.attrs.popularity = Some(popularity.to_string());
        self
    }

    pub fn build(self) -> ItemAttributes {
        self.attrs
    }
}

/// The two-card collection used throughout the scenario tests
pub fn scenario_cards() -> Vec<ItemAttributes> {
    vec![
        CardBuilder::new("1")
            .category("news")
            .title("Beta")
            .date("2024-01-01")
            .popularity(5)
            .build(),
        CardBuilder::new("2")
            .category("events")
            .title("Alpha")
            .date("2024-06-01")
            .popularity(10)
            .build(),
    ]
}

/// Attach an engine with default timings
pub fn attach(cards: Vec<ItemAttributes>) -> Engine<MemorySurface> {
    Engine::attach(MemorySurface::new(cards), &Config::default())
}

/// Visible ids as plain strings
pub fn visible(engine: &Engine<MemorySurface>) -> Vec<String> {
    engine.visible().iter().map(ToString::to_string).collect()
}

/// Every status message written so far, oldest first
pub fn announcements(engine: &Engine<MemorySurface>) -> Vec<String> {
    engine
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            faceted_collection::surface::SurfaceOp::Status(message) => Some(message.clone()),
            _ => None,
        })
        .collect()
}
