//! Item storage for a collection instance.
//!
//! Items are read once from the presentation surface at attach time and kept
//! as an immutable snapshot. Every pipeline run filters and sorts this
//! snapshot; nothing is ever written back.

pub mod item_store;

pub use item_store::ItemStore;
