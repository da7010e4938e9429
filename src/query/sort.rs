//! Comparator selection and stable ordering of filtered items.
//!
//! Each [`SortKey`] maps to at most one comparator through an exhaustive
//! `match`. Equal items always keep their input order: ties are broken by
//! input position inside the comparison itself, so stability does not depend
//! on the sorting routine used.

use crate::domain::{Item, SortKey};
use feruca::Collator;
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Compares two items for one sort key.
pub type Comparator = fn(&Item, &Item) -> Ordering;

/// Returns the comparator for `key`, or `None` for the original order.
#[must_use]
pub fn comparator(key: SortKey) -> Option<Comparator> {
    match key {
        SortKey::Default => None,
        SortKey::Title => Some(by_title),
        SortKey::Date => Some(by_date_desc),
        SortKey::Popularity => Some(by_popularity_desc),
    }
}

/// Case-insensitive ascending title order under the root Unicode collation,
/// so accented letters sort with their base letter.
fn by_title(a: &Item, b: &Item) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a.title_key(), b.title_key()))
}

/// Newest first. `None` compares below every date, so missing dates go last.
fn by_date_desc(a: &Item, b: &Item) -> Ordering {
    b.date.cmp(&a.date)
}

/// Highest popularity first.
fn by_popularity_desc(a: &Item, b: &Item) -> Ordering {
    b.popularity.cmp(&a.popularity)
}

/// Returns a new sequence of `items` ordered by `key`.
///
/// The input is never mutated. [`SortKey::Default`] returns the input order
/// unchanged.
///
/// # Example
///
/// ```
/// use faceted_collection::domain::{Item, ItemAttributes, SortKey};
/// use faceted_collection::query::sort;
///
/// let beta = Item::from_attributes(0, &ItemAttributes { title: Some("beta".into()), ..Default::default() });
/// let alpha = Item::from_attributes(1, &ItemAttributes { title: Some("Alpha".into()), ..Default::default() });
/// let input = vec![&beta, &alpha];
///
/// let sorted = sort(&input, SortKey::Title);
/// assert_eq!(sorted[0].title, "Alpha");
/// assert_eq!(input[0].title, "beta");
/// ```
#[must_use]
pub fn sort<'a>(items: &[&'a Item], key: SortKey) -> Vec<&'a Item> {
    let _span = tracing::debug_span!("sort", item_count = items.len(), sort_key = %key).entered();

    let Some(compare) = comparator(key) else {
        return items.to_vec();
    };

    let mut indexed: Vec<(usize, &'a Item)> = items.iter().copied().enumerate().collect();
    indexed.sort_unstable_by(|(ia, a), (ib, b)| compare(a, b).then_with(|| ia.cmp(ib)));
    indexed.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemAttributes;

    fn item(id: &str, title: &str, date: Option<&str>, popularity: Option<&str>) -> Item {
        Item::from_attributes(
            0,
            &ItemAttributes {
                id: Some(id.into()),
                title: Some(title.into()),
                date: date.map(String::from),
                popularity: popularity.map(String::from),
                ..Default::default()
            },
        )
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn test_default_keeps_input_order() {
        let a = item("a", "Zed", None, None);
        let b = item("b", "Alpha", None, None);
        let sorted = sort(&[&a, &b], SortKey::Default);
        assert_eq!(ids(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_title_ignores_case() {
        let a = item("a", "banana", None, None);
        let b = item("b", "Apple", None, None);
        let c = item("c", "cherry", None, None);
        let sorted = sort(&[&a, &b, &c], SortKey::Title);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_title_collates_accented_letters() {
        let z = item("z", "Zebra", None, None);
        let e = item("e", "Éclair", None, None);
        let a = item("a", "apple", None, None);
        let o = item("o", "Öl", None, None);
        let sorted = sort(&[&z, &e, &a, &o], SortKey::Title);
        assert_eq!(ids(&sorted), vec!["a", "e", "o", "z"]);
    }

    #[test]
    fn test_date_descending_with_missing_last() {
        let a = item("a", "", Some("2023-01-01"), None);
        let b = item("b", "", None, None);
        let c = item("c", "", Some("garbage"), None);
        let d = item("d", "", Some("2024-06-01"), None);
        let sorted = sort(&[&a, &b, &c, &d], SortKey::Date);
        assert_eq!(ids(&sorted), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_popularity_descending_missing_is_zero() {
        let a = item("a", "", None, Some("5"));
        let b = item("b", "", None, None);
        let c = item("c", "", None, Some("-1"));
        let d = item("d", "", None, Some("10"));
        let sorted = sort(&[&a, &b, &c, &d], SortKey::Popularity);
        assert_eq!(ids(&sorted), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items: Vec<Item> = (0..20)
            .map(|i| item(&i.to_string(), "same", Some("2024-01-01"), Some("3")))
            .collect();
        let refs: Vec<&Item> = items.iter().collect();
        let expected = ids(&refs);
        for key in SortKey::ALL {
            assert_eq!(ids(&sort(&refs, key)), expected, "{key}");
        }
    }
}
