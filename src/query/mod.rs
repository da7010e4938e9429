//! Query stages of the pipeline: predicate then sort.
//!
//! - [`predicate`]: combined category AND search predicate
//! - [`sort`]: comparator selection and stable reordering
//!
//! [`visible_order`] runs both stages against an [`ItemStore`] and yields the
//! ordered ids of the visible set.

pub mod predicate;
pub mod sort;

pub use predicate::{build, Predicate};
pub use sort::{comparator, sort, Comparator};

use crate::domain::{FilterState, ItemId};
use crate::store::ItemStore;

/// Computes the ordered visible set for `state`.
///
/// # Example
///
/// ```
/// use faceted_collection::domain::{FilterState, ItemAttributes, ItemId, SortKey};
/// use faceted_collection::query::visible_order;
/// use faceted_collection::store::ItemStore;
///
/// let store = ItemStore::from_attributes(&[
///     ItemAttributes { id: Some("1".into()), title: Some("Beta".into()), ..Default::default() },
///     ItemAttributes { id: Some("2".into()), title: Some("Alpha".into()), ..Default::default() },
/// ]);
/// let state = FilterState { sort_key: SortKey::Title, ..Default::default() };
/// assert_eq!(visible_order(&store, &state), vec![ItemId::from("2"), ItemId::from("1")]);
/// ```
#[must_use]
pub fn visible_order(store: &ItemStore, state: &FilterState) -> Vec<ItemId> {
    let filtered = build(state).filter(store.items());
    sort(&filtered, state.sort_key)
        .into_iter()
        .map(|item| item.id.clone())
        .collect()
}
