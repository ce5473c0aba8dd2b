//! Core domain types for the StaySuite engine.
//!
//! Listings, categories, preference profiles and the seeded catalog live
//! here, together with the catalog search filter, stay quotes, the
//! destination-advice contract and the [`Scorer`] trait that recommendation
//! strategies implement. Constructors return `Result` to surface invalid
//! input early; scoring itself never fails.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod advice;
pub mod catalog;
pub mod category;
pub mod listing;
pub mod price;
pub mod profile;
pub mod quote;
pub mod scorer;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use advice::{AdviceProvider, DestinationAdvice, FallbackAdvisor};
pub use catalog::{Catalog, CatalogError};
pub use category::{Category, UnknownCategory};
pub use listing::{Amenities, Listing, ListingError};
pub use price::{InvalidPrice, Price};
pub use profile::{PREFERENCE_OPTIONS, PreferenceProfile};
pub use quote::{CLEANING_FEE, DEFAULT_NIGHTS, QuoteError, SERVICE_FEE, StayQuote};
pub use scorer::Scorer;
pub use search::{ALL_LOCATIONS, SearchQuery};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{CategoryScorer, ListingBuilder};
