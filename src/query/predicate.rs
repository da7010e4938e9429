//! Filter predicate built from the current category and search state.

use crate::domain::{FilterState, Item};

/// Combined category AND search predicate.
///
/// Built once per pipeline run from a [`FilterState`] snapshot. Matching is a
/// pure function of the predicate and the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Required category token; `None` for "all".
    category: Option<String>,
    /// Lowercased search needle; `None` for an empty term.
    needle: Option<String>,
}

impl Predicate {
    /// Returns `true` if `item` passes both the category and search tests.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        let in_category = self
            .category
            .as_ref()
            .map_or(true, |category| item.categories.contains(category));

        in_category
            && self
                .needle
                .as_ref()
                .map_or(true, |needle| item.search_key().contains(needle.as_str()))
    }

    /// Keeps the items that match, preserving their order.
    #[must_use]
    pub fn filter<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Builds the combined predicate for `state`.
///
/// - category: passes when the state selects "all" or the item carries the
///   selected token
/// - search: passes when the term is empty or the item's searchable text
///   contains it, compared case-insensitively
///
/// # Example
///
/// ```
/// use faceted_collection::domain::{FilterState, Item, ItemAttributes};
/// use faceted_collection::query::build;
///
/// let item = Item::from_attributes(0, &ItemAttributes {
///     category: Some("news".into()),
///     title: Some("City Council Meeting".into()),
///     ..Default::default()
/// });
/// let state = FilterState {
///     category: "news".into(),
///     search_term: "COUNCIL".into(),
///     ..Default::default()
/// };
/// assert!(build(&state).matches(&item));
/// ```
#[must_use]
pub fn build(state: &FilterState) -> Predicate {
    Predicate {
        category: (!state.is_all_categories()).then(|| state.category.clone()),
        needle: (!state.search_term.is_empty()).then(|| state.search_term.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemAttributes;

    fn item(category: &str, text: &str) -> Item {
        Item::from_attributes(
            0,
            &ItemAttributes {
                category: Some(category.into()),
                text: Some(text.into()),
                ..Default::default()
            },
        )
    }

    fn state(category: &str, term: &str) -> FilterState {
        FilterState {
            category: category.into(),
            search_term: term.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_and_empty_term_match_everything() {
        let predicate = build(&FilterState::default());
        assert!(predicate.matches(&item("", "")));
        assert!(predicate.matches(&item("news", "anything")));
    }

    #[test]
    fn test_category_membership() {
        let predicate = build(&state("events", ""));
        assert!(predicate.matches(&item("news events", "")));
        assert!(!predicate.matches(&item("news", "")));
        assert!(!predicate.matches(&item("", "")));
    }

    #[test]
    fn test_category_is_exact_token() {
        let predicate = build(&state("new", ""));
        assert!(!predicate.matches(&item("news", "")));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let predicate = build(&state("all", "ALP"));
        assert!(predicate.matches(&item("", "Alpine hiking")));
        assert!(predicate.matches(&item("", "the alps")));
        assert!(!predicate.matches(&item("", "Beta")));
    }

    #[test]
    fn test_conjunction_not_disjunction() {
        let predicate = build(&state("news", "alpha"));
        assert!(predicate.matches(&item("news", "Alpha")));
        assert!(!predicate.matches(&item("events", "Alpha")));
        assert!(!predicate.matches(&item("news", "Beta")));
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![item("a", "one"), item("b", "two"), item("a", "three")];
        let kept = build(&state("a", "")).filter(&items);
        let texts: Vec<&str> = kept.iter().map(|i| i.searchable_text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three"]);
    }
}
