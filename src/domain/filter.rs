//! Filter state and sort keys.
//!
//! [`FilterState`] is the small state object every user interaction mutates:
//! the selected category, the committed search term and the active sort key.

use std::fmt;

/// Category sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Sort order applied to the filtered items.
///
/// A closed set: adding a key forces every `match` over it (comparator
/// selection, announcement labels) to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Original load order; no comparator is applied.
    #[default]
    Default,
    /// Case-insensitive ascending by title.
    Title,
    /// Newest first; missing or unparsable dates last.
    Date,
    /// Highest popularity first; missing counts as 0.
    Popularity,
}

impl SortKey {
    /// Every sort key, in control order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Title, Self::Date, Self::Popularity];

    /// Resolves a control token to a sort key.
    ///
    /// Unknown tokens fall back to [`SortKey::Default`] rather than failing.
    ///
    /// # Example
    ///
    /// ```
    /// use faceted_collection::SortKey;
    ///
    /// assert_eq!(SortKey::from_token("popularity"), SortKey::Popularity);
    /// assert_eq!(SortKey::from_token(" Title "), SortKey::Title);
    /// assert_eq!(SortKey::from_token("relevance"), SortKey::Default);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "default" => Self::Default,
            "title" => Self::Title,
            "date" => Self::Date,
            "popularity" => Self::Popularity,
            other => {
                tracing::debug!(token = %other, "unknown sort key, using default order");
                Self::Default
            }
        }
    }

    /// Control token for this key, as used in announcements.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Title => "title",
            Self::Date => "date",
            Self::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Current filter, search and sort selection for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category token, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Committed search term; case-folded only when matching.
    pub search_term: String,
    /// Active sort key.
    pub sort_key: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            sort_key: SortKey::Default,
        }
    }
}

impl FilterState {
    /// Whether the category filter is the "no restriction" sentinel.
    #[must_use]
    pub fn is_all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert!(state.is_all_categories());
        assert!(state.search_term.is_empty());
        assert_eq!(state.sort_key, SortKey::Default);
    }

    #[test]
    fn test_token_round_trip_for_every_key() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_token(key.token()), key);
        }
    }

    #[test]
    fn test_unknown_token_falls_back() {
        assert_eq!(SortKey::from_token(""), SortKey::Default);
        assert_eq!(SortKey::from_token("newest"), SortKey::Default);
    }
}
