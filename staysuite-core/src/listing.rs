//! Hotel listings and their amenity labels.

use thiserror::Error;

use crate::{Category, Price};

/// Ordered amenity labels advertised by a listing.
///
/// Labels are free-form and compared by exact string equality. Duplicates are
/// kept as supplied so each occurrence counts when scoring.
///
/// # Examples
/// ```
/// use staysuite_core::Amenities;
///
/// let amenities = Amenities::from_iter(["Spa", "Pool"]);
/// assert!(amenities.contains("Spa"));
/// assert!(!amenities.contains("spa"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Amenities(Vec<String>);

impl Amenities {
    /// Construct an empty amenity set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Report whether `label` is advertised.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|amenity| amenity == label)
    }

    /// Report whether any of `labels` is advertised.
    #[must_use]
    pub fn contains_any(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.contains(label))
    }

    /// Iterate over labels in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of labels, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether no labels are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Amenities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A bookable property in the catalog.
///
/// # Examples
/// ```
/// use staysuite_core::{Amenities, Category, Listing, Price};
///
/// # fn main() -> Result<(), staysuite_core::ListingError> {
/// let listing = Listing::new(
///     "h4",
///     "Silicon Valley Stay",
///     "San Francisco, CA",
///     Category::Business,
///     Price::whole(390),
///     Amenities::from_iter(["Smart Rooms", "Gym"]),
/// )?;
/// assert_eq!(listing.category, Category::Business);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "ListingRecord")
)]
pub struct Listing {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form "City, Region" location.
    pub location: String,
    /// Category tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    /// Price per night; catalogs may carry fractional amounts.
    pub nightly_price: Price,
    /// Advertised amenities.
    pub amenities: Amenities,
}

/// Errors returned by [`Listing::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// The identifier was empty or whitespace.
    #[error("listing id must not be empty")]
    EmptyId,
    /// The nightly price was zero.
    #[error("listing {id} must have a positive nightly price")]
    NonPositivePrice {
        /// Identifier of the rejected listing.
        id: String,
    },
}

impl Listing {
    /// Validate and construct a [`Listing`].
    ///
    /// # Errors
    /// Returns [`ListingError`] when the id is blank or the price is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        category: Category,
        nightly_price: Price,
        amenities: Amenities,
    ) -> Result<Self, ListingError> {
        let ident: String = id.into();
        if ident.trim().is_empty() {
            return Err(ListingError::EmptyId);
        }
        if nightly_price.is_zero() {
            return Err(ListingError::NonPositivePrice { id: ident });
        }
        Ok(Self {
            id: ident,
            name: name.into(),
            location: location.into(),
            category,
            nightly_price,
            amenities,
        })
    }
}

/// Wire shape accepted when deserialising listings.
///
/// A missing `amenities` key is treated as an empty set.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: String,
    #[serde(rename = "type")]
    category: Category,
    #[serde(alias = "pricePerNight")]
    nightly_price: Price,
    #[serde(default)]
    amenities: Amenities,
}

#[cfg(feature = "serde")]
impl TryFrom<ListingRecord> for Listing {
    type Error = ListingError;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.location,
            record.category,
            record.nightly_price,
            record.amenities,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(id: &str, price: u32) -> Result<Listing, ListingError> {
        Listing::new(id, "Name", "Town", Category::Resort, Price::whole(price), Amenities::new())
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn listing_requires_id(#[case] id: &str) {
        assert_eq!(build(id, 100), Err(ListingError::EmptyId));
    }

    #[test]
    fn listing_requires_positive_price() {
        assert!(matches!(
            build("h9", 0),
            Err(ListingError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn duplicate_amenities_are_kept() {
        let amenities = Amenities::from_iter(["Spa", "Spa"]);
        assert_eq!(amenities.len(), 2);
        assert_eq!(amenities.iter().filter(|a| *a == "Spa").count(), 2);
    }

    #[test]
    fn contains_any_checks_every_label() {
        let amenities = Amenities::from_iter(["Heated Pool"]);
        let labels = vec!["Pool".to_owned(), "Heated Pool".to_owned()];
        assert!(amenities.contains_any(&labels));
        assert!(!Amenities::new().contains_any(&labels));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_amenities_deserialise_as_empty() {
        let json = r#"{"id":"h7","name":"Dune","location":"Tucson, AZ","type":"Resort","nightlyPrice":180}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert!(listing.amenities.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("199.99", 19_999)]
    #[case("400.5", 40_050)]
    #[case("320", 32_000)]
    fn deserialises_fractional_prices(#[case] price: &str, #[case] cents: u64) {
        let json = format!(r#"{{"id":"h7","type":"Resort","pricePerNight":{price},"amenities":[]}}"#);
        let listing: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing.nightly_price.cents(), cents);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialising_validates_price() {
        for json in [
            r#"{"id":"h7","type":"Resort","pricePerNight":0}"#,
            r#"{"id":"h7","type":"Resort","pricePerNight":0.001}"#,
            r#"{"id":"h7","type":"Resort","pricePerNight":-20}"#,
        ] {
            assert!(serde_json::from_str::<Listing>(json).is_err(), "{json}");
        }
    }
}
