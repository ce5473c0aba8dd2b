//! Rank a catalog for a profile and keep the best few listings.

use std::cmp::Reverse;

use serde::Serialize;
use staysuite_core::{Listing, PreferenceProfile, Scorer};

use crate::PreferenceScorer;

/// Maximum number of listings returned by [`recommend`].
pub const RECOMMENDATION_LIMIT: usize = 3;

/// A listing paired with the score it earned for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
    /// The scored listing, borrowed from the catalog.
    pub listing: &'a Listing,
    /// Its relevance score; always positive.
    pub score: u32,
}

/// Score every listing and return those with a positive score, best first.
///
/// The sort is stable, so listings with equal scores keep their catalog
/// order. Neither input is modified and nothing is cached between calls.
///
/// # Examples
/// ```
/// use staysuite_core::{Catalog, PreferenceProfile};
/// use staysuite_scorer::{PreferenceScorer, rank};
///
/// let catalog = Catalog::featured();
/// let profile = PreferenceProfile::from_tags(["Business", "Luxury"]);
/// let ranked = rank(&PreferenceScorer::default(), &profile, catalog.listings());
/// let top: Vec<_> = ranked.iter().map(|r| (r.listing.id.as_str(), r.score)).collect();
/// assert_eq!(top[..3], [("h1", 18), ("h4", 13), ("h5", 6)]);
/// ```
pub fn rank<'a, S>(
    scorer: &S,
    profile: &PreferenceProfile,
    catalog: &'a [Listing],
) -> Vec<Recommendation<'a>>
where
    S: Scorer + ?Sized,
{
    if profile.is_empty() {
        return Vec::new();
    }
    let mut ranked: Vec<Recommendation<'a>> = catalog
        .iter()
        .map(|listing| Recommendation {
            listing,
            score: scorer.score(listing, profile),
        })
        .filter(|candidate| candidate.score > 0)
        .collect();
    // Stable sort: equal scores stay in catalog order.
    ranked.sort_by_key(|candidate| Reverse(candidate.score));
    log::debug!(
        "ranked {} of {} listings for {} preference tags",
        ranked.len(),
        catalog.len(),
        profile.tags().len()
    );
    ranked
}

/// Return at most [`RECOMMENDATION_LIMIT`] listings ranked by `scorer`.
#[must_use]
pub fn recommend_with<S>(scorer: &S, profile: &PreferenceProfile, catalog: &[Listing]) -> Vec<Listing>
where
    S: Scorer + ?Sized,
{
    rank(scorer, profile, catalog)
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|recommendation| recommendation.listing.clone())
        .collect()
}

/// Recommend up to three listings using the default rule table.
///
/// An empty profile or catalog yields an empty result; listings scoring zero
/// are never returned.
///
/// # Examples
/// ```
/// use staysuite_core::{Catalog, PreferenceProfile};
/// use staysuite_scorer::recommend;
///
/// let catalog = Catalog::featured();
/// let picks = recommend(&PreferenceProfile::from_tags(["Family"]), catalog.listings());
/// let ids: Vec<_> = picks.iter().map(|l| l.id.as_str()).collect();
/// assert_eq!(ids, ["h1", "h5", "h6"]);
/// ```
#[must_use]
pub fn recommend(profile: &PreferenceProfile, catalog: &[Listing]) -> Vec<Listing> {
    recommend_with(&PreferenceScorer::default(), profile, catalog)
}
