//! Preference-based recommendations for StaySuite listings.
//!
//! The crate turns a user's declared preference tags into a short, ordered
//! list of listings:
//! - **Scoring** sums direct matches (category and amenity labels that are
//!   also profile tags) with the bonuses of a declarative [`RuleTable`].
//!   [`PreferenceScorer`] implements the
//!   [`Scorer`](staysuite_core::Scorer) trait so callers can swap strategies.
//! - **Ranking** keeps listings with a positive score, stably sorted so ties
//!   resolve in catalog order, and [`recommend`] trims the result to
//!   [`RECOMMENDATION_LIMIT`] entries.
//!
//! Rule tables can be customised in code or loaded from JSON with
//! [`load_rule_table`].
//!
//! # Examples
//!
//! ```
//! use staysuite_core::{Catalog, PreferenceProfile};
//! use staysuite_scorer::recommend;
//!
//! let catalog = Catalog::featured();
//! let profile = PreferenceProfile::from_tags(["Boutique"]);
//! let picks = recommend(&profile, catalog.listings());
//! assert_eq!(picks.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod recommend;
mod rules;
mod scorer;

pub use error::RuleTableError;
pub use recommend::{RECOMMENDATION_LIMIT, Recommendation, rank, recommend, recommend_with};
pub use rules::{BonusRule, Condition, MatchWeights, RuleTable, load_rule_table};
pub use scorer::PreferenceScorer;
