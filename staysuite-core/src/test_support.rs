//! Test-only helpers for building listings and scoring them trivially.

use crate::{Amenities, Category, Listing, PreferenceProfile, Price, Scorer};

/// Fluent builder for listings in tests.
///
/// Defaults to a Resort priced at 200 with no amenities. The builder skips
/// validation so tests can construct edge cases directly.
#[derive(Debug, Clone)]
pub struct ListingBuilder {
    listing: Listing,
}

impl ListingBuilder {
    /// Start a listing with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let ident: String = id.into();
        Self {
            listing: Listing {
                name: format!("Listing {ident}"),
                id: ident,
                location: "Springfield, IL".to_owned(),
                category: Category::Resort,
                nightly_price: Price::whole(200),
                amenities: Amenities::new(),
            },
        }
    }

    /// Set the category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.listing.category = category;
        self
    }

    /// Set the nightly price.
    #[must_use]
    pub const fn price(mut self, nightly_price: Price) -> Self {
        self.listing.nightly_price = nightly_price;
        self
    }

    /// Set the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.listing.location = location.into();
        self
    }

    /// Replace the amenities.
    #[must_use]
    pub fn amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listing.amenities = amenities.into_iter().collect();
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Listing {
        self.listing
    }
}

/// Test `Scorer` awarding one point when the listing's category is a
/// profile tag.
#[derive(Debug, Copy, Clone, Default)]
pub struct CategoryScorer;

impl Scorer for CategoryScorer {
    fn score(&self, listing: &Listing, profile: &PreferenceProfile) -> u32 {
        u32::from(profile.contains(listing.category.as_str()))
    }
}
