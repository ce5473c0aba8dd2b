//! Facade crate for the StaySuite listing engine.
//!
//! Re-exports the domain model from `staysuite-core` together with the
//! preference-based recommendation scorer, so front ends depend on a single
//! crate.

#![forbid(unsafe_code)]

pub use staysuite_core::{
    ALL_LOCATIONS, AdviceProvider, Amenities, CLEANING_FEE, Catalog, CatalogError, Category,
    DEFAULT_NIGHTS, DestinationAdvice, FallbackAdvisor, InvalidPrice, Listing, ListingError,
    PREFERENCE_OPTIONS, PreferenceProfile, Price, QuoteError, SERVICE_FEE, Scorer, SearchQuery,
    StayQuote, UnknownCategory,
};

pub use staysuite_scorer::{
    BonusRule, Condition, MatchWeights, PreferenceScorer, RECOMMENDATION_LIMIT, Recommendation,
    RuleTable, RuleTableError, load_rule_table, rank, recommend, recommend_with,
};

#[cfg(feature = "test-support")]
pub use staysuite_core::{CategoryScorer, ListingBuilder};
