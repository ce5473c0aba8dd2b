//! Destination advice shown next to a listing.
//!
//! Advice normally comes from a generative-text service. That call is not
//! made here; this module fixes the shape of its answer, parses raw replies,
//! and supplies the fallbacks used when the service is unavailable or
//! returns something unreadable.

use crate::Listing;

/// A short travel summary for a listing's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DestinationAdvice {
    /// One-sentence overview.
    pub summary: String,
    /// Notable things to see or do.
    pub highlights: Vec<String>,
    /// Kind of traveller the destination suits.
    pub best_for: String,
}

impl DestinationAdvice {
    /// Generic advice used when no advice service is configured.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            summary: "Experience the local culture and vibrant atmosphere tailored just for you."
                .to_owned(),
            highlights: to_owned_all(&["Local Cuisine", "Historic Landmarks", "Modern Amenities"]),
            best_for: "Relaxation & Exploration".to_owned(),
        }
    }

    /// Listing-specific advice used when the service reply is unusable.
    #[must_use]
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            summary: format!(
                "Discover the beauty of {} with a stay at {}.",
                listing.location, listing.name
            ),
            highlights: to_owned_all(&["Central Location", "Top Rated Service", "Exclusive Access"]),
            best_for: "Discerning Travelers".to_owned(),
        }
    }

    /// Parse a raw model reply, tolerating Markdown code fences.
    ///
    /// Any reply that is not the expected JSON object yields
    /// [`DestinationAdvice::for_listing`].
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::{Catalog, DestinationAdvice};
    ///
    /// let catalog = Catalog::featured();
    /// let listing = catalog.get("h2").expect("seeded listing");
    /// let reply = "```json\n{\"summary\":\"Sun.\",\"highlights\":[\"Beach\"],\"bestFor\":\"Couples\"}\n```";
    /// let advice = DestinationAdvice::from_model_reply(reply, listing);
    /// assert_eq!(advice.best_for, "Couples");
    ///
    /// let fallback = DestinationAdvice::from_model_reply("sorry, no", listing);
    /// assert_eq!(fallback, DestinationAdvice::for_listing(listing));
    /// ```
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn from_model_reply(reply: &str, listing: &Listing) -> Self {
        let cleaned = reply.replace("```json", "").replace("```", "");
        match serde_json::from_str(cleaned.trim()) {
            Ok(advice) => advice,
            Err(err) => {
                log::warn!("discarding unreadable advice for listing {}: {err}", listing.id);
                Self::for_listing(listing)
            }
        }
    }
}

fn to_owned_all(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Supply destination advice for a listing.
///
/// Implementations never fail: any error must degrade to a fallback answer.
pub trait AdviceProvider: Send + Sync {
    /// Return advice for `listing`.
    fn advise(&self, listing: &Listing) -> DestinationAdvice;
}

/// Provider used when no advice service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAdvisor;

impl AdviceProvider for FallbackAdvisor {
    fn advise(&self, _listing: &Listing) -> DestinationAdvice {
        DestinationAdvice::generic()
    }
}
