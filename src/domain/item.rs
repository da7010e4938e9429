//! Item domain model and attribute extraction.
//!
//! An [`Item`] is one card in a collection. Items are built exactly once from
//! the raw [`ItemAttributes`] a presentation surface exposes, and are immutable
//! afterwards: later changes to the surface are never observed.
//!
//! Extraction never fails. Missing or malformed attributes degrade to the
//! defaults the filter and sort stages expect (no categories, empty title,
//! oldest date, zero popularity).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Stable identity of an item.
///
/// Identity comes from the item descriptor, not from the position of its
/// element on the presentation surface. When a descriptor carries no explicit
/// id, its load index is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Raw attributes of one card as set by the surrounding application.
///
/// Every field is optional; the engine decides how absent values degrade.
/// Numeric JSON values are accepted wherever a string is expected so fixtures
/// can write `"popularity": 5` as well as `"popularity": "5"`.
///
/// # Example
///
/// ```
/// use faceted_collection::domain::ItemAttributes;
///
/// let attrs: ItemAttributes = serde_json::from_str(
///     r#"{"id": 1, "category": "news events", "title": "Beta", "popularity": 5}"#,
/// ).unwrap();
/// assert_eq!(attrs.id.as_deref(), Some("1"));
/// assert_eq!(attrs.popularity.as_deref(), Some("5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    /// Explicit stable id.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub id: Option<String>,

    /// Whitespace-separated category membership tokens.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub category: Option<String>,

    /// Display title.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub title: Option<String>,

    /// Short description, used as a search fallback.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub description: Option<String>,

    /// ISO-style publication date.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub date: Option<String>,

    /// Popularity as an integer string.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub popularity: Option<String>,

    /// Visible text of the card, matched by free-text search.
    #[serde(default, deserialize_with = "deserialize_attribute")]
    pub text: Option<String>,
}

/// Accepts a string, number or boolean attribute value; `null` means absent.
fn deserialize_attribute<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(Error::custom("attribute must be a string, number or boolean")),
    }
}

/// One immutable card in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identity.
    pub id: ItemId,
    /// Category tokens. Empty means the item is hidden by any specific category.
    pub categories: HashSet<String>,
    /// Display title, empty when absent.
    pub title: String,
    /// Parsed date; `None` when absent or unparsable (sorts as oldest).
    pub date: Option<DateTime<Utc>>,
    /// Popularity; 0 when absent or non-numeric.
    pub popularity: i64,
    /// Text matched by free-text search.
    pub searchable_text: String,
    /// Lowercased `searchable_text`, folded once at load.
    search_key: String,
    /// Lowercased sort key for title ordering.
    title_key: String,
}

impl Item {
    /// Builds an item from raw surface attributes.
    ///
    /// `index` is the item's load position, used as the id when the
    /// attributes carry none.
    ///
    /// # Fallbacks
    ///
    /// - searchable text: `text`, then `title`, then `description`, then empty
    /// - title sort key: `title`, then the searchable text, then empty
    /// - date: RFC 3339, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`, else oldest
    /// - popularity: leading integer prefix (`"12abc"` is 12), else 0
    ///
    /// # Example
    ///
    /// ```
    /// use faceted_collection::domain::{Item, ItemAttributes};
    ///
    /// let item = Item::from_attributes(0, &ItemAttributes {
    ///     category: Some("news  events".into()),
    ///     title: Some("Beta".into()),
    ///     popularity: Some("oops".into()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(item.id.as_str(), "0");
    /// assert!(item.categories.contains("events"));
    /// assert_eq!(item.popularity, 0);
    /// assert_eq!(item.searchable_text, "Beta");
    /// ```
    #[must_use]
    pub fn from_attributes(index: usize, attrs: &ItemAttributes) -> Self {
        let id = attrs
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| ItemId::from(index.to_string()), ItemId::from);

        let categories = attrs
            .category
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect();

        let title = attrs.title.clone().unwrap_or_default();

        let searchable_text = [&attrs.text, &attrs.title, &attrs.description]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default();

        let title_key = if title.is_empty() {
            searchable_text.to_lowercase()
        } else {
            title.to_lowercase()
        };

        Self {
            id,
            categories,
            date: attrs.date.as_deref().and_then(parse_date),
            popularity: attrs.popularity.as_deref().map_or(0, parse_popularity),
            search_key: searchable_text.to_lowercase(),
            searchable_text,
            title,
            title_key,
        }
    }

    /// Lowercased searchable text.
    #[must_use]
    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// Lowercased title used for title ordering; compared with Unicode collation.
    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }
}

/// Offset-less date-time shapes, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-style date, returning `None` for anything unrecognised.
///
/// Accepts RFC 3339, the offset-less date-time shapes above, a plain date,
/// and a year-month (`2024-06`, read as the first of the month).
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok());
    if let Some(dt) = naive {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Parses the leading integer of `raw`, returning 0 when there is none.
///
/// Values beyond the `i64` range saturate.
#[must_use]
pub fn parse_popularity(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    let signed = if negative { format!("-{digits}") } else { digits.to_string() };

    // Every error left is overflow.
    match signed.parse::<i64>() {
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
