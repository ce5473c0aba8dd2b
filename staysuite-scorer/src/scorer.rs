//! Rule-table scorer implementing the core [`Scorer`] trait.

use staysuite_core::{Listing, PreferenceProfile, Scorer};

use crate::RuleTable;

/// Additive scorer driven by a [`RuleTable`].
///
/// A listing earns the category weight when its category tag is a profile
/// tag, the amenity weight for every amenity label that is a profile tag, and
/// the bonus of every rule that fires. Signals compound: an amenity matched
/// directly can also satisfy a bonus rule. Sums saturate at `u32::MAX`.
///
/// # Examples
/// ```
/// use staysuite_core::{Catalog, PreferenceProfile, Scorer};
/// use staysuite_scorer::PreferenceScorer;
///
/// let catalog = Catalog::featured();
/// let profile = PreferenceProfile::from_tags(["Boutique"]);
/// let listing = catalog.get("h6").expect("seeded listing");
/// assert_eq!(PreferenceScorer::default().score(listing, &profile), 15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceScorer {
    table: RuleTable,
}

impl PreferenceScorer {
    /// Build a scorer from a custom rule table.
    #[must_use]
    pub const fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Borrow the rule table in use.
    #[must_use]
    pub const fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Scorer for PreferenceScorer {
    fn score(&self, listing: &Listing, profile: &PreferenceProfile) -> u32 {
        let weights = self.table.weights();
        let category = if profile.contains(listing.category.as_str()) {
            weights.category
        } else {
            0
        };
        let amenities = listing
            .amenities
            .iter()
            .filter(|label| profile.contains(label))
            .fold(0_u32, |acc, _| acc.saturating_add(weights.amenity));
        let bonuses = self
            .table
            .rules()
            .iter()
            .filter(|rule| rule.applies(listing, profile))
            .fold(0_u32, |acc, rule| acc.saturating_add(rule.bonus));
        category.saturating_add(amenities).saturating_add(bonuses)
    }
}
