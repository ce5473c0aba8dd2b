//! The listing catalog and its seeded demo contents.
//!
//! A [`Catalog`] is an ordered, immutable collection of listings with unique
//! identifiers. Order matters: recommendation ties resolve in catalog order.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Amenities, Category, Listing, Price, SearchQuery};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two listings shared an identifier.
    #[error("duplicate listing id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Ordered collection of listings.
///
/// # Examples
/// ```
/// use staysuite_core::Catalog;
///
/// let catalog = Catalog::featured();
/// assert_eq!(catalog.len(), 6);
/// assert_eq!(catalog.get("h1").map(|l| l.name.as_str()), Some("The Grand Oakhaven"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Validate and construct a catalog, preserving the supplied order.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when an identifier repeats.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: listing.id.clone(),
                });
            }
        }
        Ok(Self { listings })
    }

    /// The six featured hotels the booking front end ships with.
    #[must_use]
    pub fn featured() -> Self {
        let listings = FEATURED
            .iter()
            .map(|seed| Listing {
                id: seed.id.to_owned(),
                name: seed.name.to_owned(),
                location: seed.location.to_owned(),
                category: seed.category,
                nightly_price: seed.nightly_price,
                amenities: seed.amenities.iter().copied().collect::<Amenities>(),
            })
            .collect();
        Self { listings }
    }

    /// Look up a listing by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Borrow the listings in catalog order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Iterate over listings in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    /// Number of listings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.listings.len()
    }

    /// Report whether the catalog has no listings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Return listings matching `query`, in catalog order.
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::{Catalog, SearchQuery};
    ///
    /// let catalog = Catalog::featured();
    /// let hits = catalog.search(&SearchQuery::new().with_location("miami"));
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, "h2");
    /// ```
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<&Listing> {
        let hits: Vec<&Listing> = self.iter().filter(|l| query.matches(l)).collect();
        log::debug!(
            "catalog search matched {} of {} listings",
            hits.len(),
            self.len()
        );
        hits
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let listings = Vec::<Listing>::deserialize(deserializer)?;
        Self::new(listings).map_err(serde::de::Error::custom)
    }
}

struct SeedListing {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    category: Category,
    nightly_price: Price,
    amenities: &'static [&'static str],
}

const FEATURED: [SeedListing; 6] = [
    SeedListing {
        id: "h1",
        name: "The Grand Oakhaven",
        location: "New York, NY",
        category: Category::Luxury,
        nightly_price: Price::whole(450),
        amenities: &["Spa", "Pool", "Rooftop Bar", "Free Wi-Fi", "Gym"],
    },
    SeedListing {
        id: "h2",
        name: "Azure Coast Resort",
        location: "Miami, FL",
        category: Category::Resort,
        nightly_price: Price::whole(320),
        amenities: &["Beach Access", "Infinity Pool", "Cocktail Lounge", "Valet"],
    },
    SeedListing {
        id: "h3",
        name: "The Ironworks Hotel",
        location: "Chicago, IL",
        category: Category::Boutique,
        nightly_price: Price::whole(280),
        amenities: &["Coworking Space", "Craft Coffee", "Gym", "Pet Friendly"],
    },
    SeedListing {
        id: "h4",
        name: "Silicon Valley Stay",
        location: "San Francisco, CA",
        category: Category::Business,
        nightly_price: Price::whole(390),
        amenities: &["Smart Rooms", "Conference Center", "Free Breakfast", "Gym"],
    },
    SeedListing {
        id: "h5",
        name: "Alpine Lodge & Spa",
        location: "Aspen, CO",
        category: Category::Resort,
        nightly_price: Price::whole(650),
        amenities: &["Ski Valet", "Heated Pool", "Spa", "Fireplaces"],
    },
    SeedListing {
        id: "h6",
        name: "The Modernist",
        location: "Austin, TX",
        category: Category::Boutique,
        nightly_price: Price::whole(210),
        amenities: &["Live Music", "Bar", "Pool", "Bike Rentals"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn listing(id: &str) -> Listing {
        Listing::new(id, "Name", "Town", Category::Luxury, Price::whole(100), Amenities::new()).unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![listing("a"), listing("b"), listing("a")]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateId { id: "a".to_owned() })
        );
    }

    #[test]
    fn order_is_preserved() {
        let catalog = Catalog::new(vec![listing("b"), listing("a")]).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn featured_catalog_is_valid() {
        let featured = Catalog::featured();
        assert_eq!(Catalog::new(featured.listings().to_vec()), Ok(featured));
    }

    #[rstest]
    #[case("h1", 450, Category::Luxury)]
    #[case("h4", 390, Category::Business)]
    #[case("h6", 210, Category::Boutique)]
    fn featured_lookup(#[case] id: &str, #[case] price: u32, #[case] category: Category) {
        let catalog = Catalog::featured();
        let found = catalog.get(id).unwrap();
        assert_eq!(found.nightly_price, Price::whole(price));
        assert_eq!(found.category, category);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(Catalog::featured().get("h99").is_none());
    }
}
