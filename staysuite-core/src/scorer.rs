//! Score listings for a preference profile.
//!
//! The `Scorer` trait assigns an integer relevance score to a
//! [`Listing`](crate::Listing) given a user's
//! [`PreferenceProfile`](crate::PreferenceProfile).

use crate::{Listing, PreferenceProfile};

/// Calculate a relevance score for a listing.
///
/// Higher scores indicate a better match between the listing and the user's
/// preferences. Implementations must be thread-safe (`Send` + `Sync`) so one
/// scorer can serve concurrent callers. The method is infallible; a listing
/// that matches nothing scores `0`, and callers treat `0` as "not relevant".
///
/// # Examples
///
/// ```rust
/// use staysuite_core::{Catalog, Listing, PreferenceProfile, Price, Scorer};
///
/// struct PriceScorer;
///
/// impl Scorer for PriceScorer {
///     fn score(&self, listing: &Listing, _profile: &PreferenceProfile) -> u32 {
///         u32::from(listing.nightly_price < Price::whole(300))
///     }
/// }
///
/// let catalog = Catalog::featured();
/// let profile = PreferenceProfile::new();
/// let cheap = catalog.get("h6").expect("seeded listing");
/// assert_eq!(PriceScorer.score(cheap, &profile), 1);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `listing` according to `profile`.
    fn score(&self, listing: &Listing, profile: &PreferenceProfile) -> u32;
}
