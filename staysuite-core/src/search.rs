//! Catalog filtering by location and category.

use crate::{Category, Listing};

/// Location value that matches every listing.
pub const ALL_LOCATIONS: &str = "All Locations";

/// Filter applied by [`Catalog::search`](crate::Catalog::search).
///
/// An empty query matches every listing.
///
/// # Examples
/// ```
/// use staysuite_core::{Catalog, Category, SearchQuery};
///
/// let query = SearchQuery::new().with_category(Category::Boutique);
/// let ids: Vec<_> = Catalog::featured()
///     .search(&query)
///     .into_iter()
///     .map(|l| l.id.clone())
///     .collect();
/// assert_eq!(ids, ["h3", "h6"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchQuery {
    /// Case-insensitive substring of the listing location.
    pub location: Option<String>,
    /// Exact category to keep.
    pub category: Option<Category>,
}

impl SearchQuery {
    /// Construct a query that matches everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            location: None,
            category: None,
        }
    }

    /// Restrict results to locations containing `location`.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Restrict results to `category`.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Report whether `listing` satisfies every populated filter.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_location(&listing.location)
            && self.category.is_none_or(|category| category == listing.category)
    }

    fn matches_location(&self, location: &str) -> bool {
        let Some(needle) = self.location.as_deref() else {
            return true;
        };
        if needle.is_empty() || needle == ALL_LOCATIONS {
            return true;
        }
        location.to_lowercase().contains(&needle.to_lowercase())
    }
}
