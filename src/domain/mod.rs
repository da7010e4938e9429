//! Domain layer for the collection engine.
//!
//! Core types, independent of any presentation surface or timing concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model and attribute extraction
//! - [`filter`]: Filter state and sort keys
//!
//! # Examples
//!
//! ```
//! use faceted_collection::domain::{FilterState, Item, ItemAttributes, SortKey};
//!
//! let item = Item::from_attributes(0, &ItemAttributes {
//!     title: Some("Alpha".into()),
//!     ..Default::default()
//! });
//! let state = FilterState { sort_key: SortKey::Title, ..Default::default() };
//! assert_eq!(item.title, "Alpha");
//! assert!(state.is_all_categories());
//! ```

pub mod error;
pub mod filter;
pub mod item;

pub use error::{CollectionError, Result};
pub use filter::{FilterState, SortKey, ALL_CATEGORIES};
pub use item::{Item, ItemAttributes, ItemId};
