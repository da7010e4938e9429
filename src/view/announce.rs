//! Accessible status announcements.
//!
//! One live status region per collection instance, created on first use and
//! reused afterwards. Each announcement replaces the region's text. A surface
//! without room for a region turns announcements into no-ops.

use crate::domain::SortKey;
use crate::surface::Surface;
use std::fmt;

/// A status change worth announcing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// A category was selected.
    CategoryChanged { category: String, count: usize },
    /// A sort key was selected.
    SortChanged(SortKey),
    /// A non-empty search term was committed.
    SearchResults { term: String, count: usize },
    /// The search term was cleared.
    SearchCleared,
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryChanged { category, count } => write!(
                f,
                "Filtered by {category}. Showing {count} {}.",
                plural(*count, "card", "cards")
            ),
            Self::SortChanged(key) => write!(f, "Cards sorted by {key}."),
            Self::SearchResults { term, count } => write!(
                f,
                "Search for \"{term}\" found {count} {}.",
                plural(*count, "result", "results")
            ),
            Self::SearchCleared => f.write_str("Search cleared. Showing all cards."),
        }
    }
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    NotCreated,
    Open,
    Unavailable,
}

/// The single status region of one collection instance.
#[derive(Debug)]
pub struct AnnouncementChannel {
    region: Region,
}

impl Default for AnnouncementChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncementChannel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            region: Region::NotCreated,
        }
    }

    /// Replaces the region's text with `message`, creating the region first
    /// if needed. Returns `false` when the surface has no status region.
    pub fn announce<S: Surface + ?Sized>(&mut self, message: &str, surface: &mut S) -> bool {
        if self.region == Region::NotCreated {
            self.region = if surface.create_status_region() {
                Region::Open
            } else {
                tracing::debug!("surface has no status region, announcements disabled");
                Region::Unavailable
            };
        }

        if self.region != Region::Open {
            return false;
        }

        tracing::debug!(message = %message, "announcing");
        surface.write_status(message);
        true
    }

    /// Removes the region if it was created. Later announcements recreate it.
    pub fn close<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.region == Region::Open {
            surface.remove_status_region();
        }
        self.region = Region::NotCreated;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.region == Region::Open
    }
}
