//! Immutable item snapshot for one collection instance.

use crate::domain::{Item, ItemAttributes, ItemId};
use crate::surface::Surface;
use std::collections::HashMap;

/// The immutable set of items for one collection, in original load order.
///
/// An item's position in the store is also its slot on the presentation
/// surface it was read from. Ids are unique within a store: when two
/// descriptors share an id, the later one is renamed `"{id}#{slot}"`.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    slots: HashMap<ItemId, usize>,
}

impl ItemStore {
    /// Builds a store from raw attributes, one item per descriptor.
    ///
    /// # Example
    ///
    /// ```
    /// use faceted_collection::domain::ItemAttributes;
    /// use faceted_collection::store::ItemStore;
    ///
    /// let store = ItemStore::from_attributes(&[
    ///     ItemAttributes { id: Some("a".into()), ..Default::default() },
    ///     ItemAttributes { id: Some("a".into()), ..Default::default() },
    /// ]);
    /// assert_eq!(store.len(), 2);
    /// assert_eq!(store.ids()[1].as_str(), "a#1");
    /// ```
    #[must_use]
    pub fn from_attributes(attributes: &[ItemAttributes]) -> Self {
        let mut items = Vec::with_capacity(attributes.len());
        let mut slots = HashMap::with_capacity(attributes.len());

        for (slot, attrs) in attributes.iter().enumerate() {
            let mut item = Item::from_attributes(slot, attrs);
            while slots.contains_key(&item.id) {
                let renamed = ItemId::new(format!("{}#{slot}", item.id));
                tracing::debug!(id = %item.id, renamed = %renamed, "duplicate item id");
                item.id = renamed;
            }
            slots.insert(item.id.clone(), slot);
            items.push(item);
        }

        Self { items, slots }
    }

    /// Reads every item descriptor from `surface` once.
    ///
    /// The store is a snapshot; later changes to the surface are not observed.
    pub fn load<S: Surface + ?Sized>(surface: &S) -> Self {
        let attributes = surface.read_items();
        let store = Self::from_attributes(&attributes);
        tracing::debug!(item_count = store.len(), "item store loaded");
        store
    }

    /// Items in original load order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item ids in original load order.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.slots.get(id).map(|&slot| &self.items[slot])
    }

    /// Surface slot of the item with `id`.
    #[must_use]
    pub fn slot_of(&self, id: &ItemId) -> Option<usize> {
        self.slots.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
