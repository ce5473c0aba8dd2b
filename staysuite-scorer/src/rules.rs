//! Declarative bonus rules layered on top of direct tag matches.
//!
//! Each [`BonusRule`] fires when its trigger tag is in the profile and its
//! [`Condition`] holds for the listing. Rules are evaluated independently and
//! their bonuses summed, so extending the scorer means adding rows rather than
//! branches.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use staysuite_core::{Category, Listing, PreferenceProfile, Price};

use crate::RuleTableError;

/// Listing property a bonus rule inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Condition {
    /// The listing advertises this amenity.
    HasAmenity(String),
    /// The listing advertises at least one of these amenities.
    HasAnyAmenity(Vec<String>),
    /// The nightly price is strictly above this amount.
    PriceAbove(Price),
    /// The listing belongs to this category.
    CategoryIs(Category),
}

impl Condition {
    /// Report whether the condition holds for `listing`.
    #[must_use]
    pub fn holds(&self, listing: &Listing) -> bool {
        match self {
            Self::HasAmenity(label) => listing.amenities.contains(label),
            Self::HasAnyAmenity(labels) => listing.amenities.contains_any(labels),
            Self::PriceAbove(limit) => listing.nightly_price > *limit,
            Self::CategoryIs(category) => listing.category == *category,
        }
    }

    fn problem(&self) -> Option<&'static str> {
        match self {
            Self::HasAmenity(label) if label.trim().is_empty() => {
                Some("amenity label must not be empty")
            }
            Self::HasAnyAmenity(labels) if labels.is_empty() => {
                Some("amenity list must not be empty")
            }
            Self::HasAnyAmenity(labels) if labels.iter().any(|l| l.trim().is_empty()) => {
                Some("amenity label must not be empty")
            }
            _ => None,
        }
    }
}

/// A bonus awarded when `trigger` is a profile tag and `condition` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRule {
    /// Profile tag that activates the rule.
    pub trigger: String,
    /// Listing property checked once the rule is active.
    pub condition: Condition,
    /// Points added when the rule fires.
    pub bonus: u32,
}

impl BonusRule {
    /// Construct a rule.
    pub fn new(trigger: impl Into<String>, condition: Condition, bonus: u32) -> Self {
        Self {
            trigger: trigger.into(),
            condition,
            bonus,
        }
    }

    /// Report whether the rule fires for this profile and listing.
    #[must_use]
    pub fn applies(&self, listing: &Listing, profile: &PreferenceProfile) -> bool {
        profile.contains(&self.trigger) && self.condition.holds(listing)
    }
}

/// Points for direct matches between profile tags and listing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Awarded once when the listing's category is a profile tag.
    pub category: u32,
    /// Awarded per amenity label that is also a profile tag.
    pub amenity: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            category: 10,
            amenity: 3,
        }
    }
}

/// Direct-match weights plus an ordered list of bonus rules.
///
/// # Examples
/// ```
/// use staysuite_scorer::{BonusRule, Condition, MatchWeights, RuleTable};
///
/// # fn main() -> Result<(), staysuite_scorer::RuleTableError> {
/// let table = RuleTable::new(
///     MatchWeights::default(),
///     vec![BonusRule::new("Nature", Condition::HasAmenity("Hiking".into()), 4)],
/// )?;
/// assert_eq!(table.rules().len(), 1);
/// assert_eq!(RuleTable::default().rules().len(), 9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default)]
    weights: MatchWeights,
    rules: Vec<BonusRule>,
}

impl RuleTable {
    /// Validate and construct a rule table.
    ///
    /// # Errors
    /// Returns [`RuleTableError::InvalidRule`] for a blank trigger or an empty
    /// amenity condition.
    pub fn new(weights: MatchWeights, rules: Vec<BonusRule>) -> Result<Self, RuleTableError> {
        let table = Self { weights, rules };
        table.validate()?;
        Ok(table)
    }

    /// Check every rule, reporting the first malformed one.
    ///
    /// # Errors
    /// Returns [`RuleTableError::InvalidRule`] naming the offending index.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.trigger.trim().is_empty() {
                return Err(RuleTableError::InvalidRule {
                    index,
                    reason: "trigger tag must not be empty",
                });
            }
            if let Some(reason) = rule.condition.problem() {
                return Err(RuleTableError::InvalidRule { index, reason });
            }
        }
        Ok(())
    }

    /// Direct-match weights.
    #[must_use]
    pub const fn weights(&self) -> MatchWeights {
        self.weights
    }

    /// Bonus rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[BonusRule] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        let amenity = |label: &str| Condition::HasAmenity(label.to_owned());
        let rules = vec![
            // Business travellers favour working amenities.
            BonusRule::new("Business", amenity("Coworking Space"), 5),
            BonusRule::new("Business", amenity("Free Wi-Fi"), 2),
            BonusRule::new("Business", amenity("Smart Rooms"), 3),
            BonusRule::new("Luxury", amenity("Spa"), 4),
            BonusRule::new("Luxury", amenity("Valet"), 2),
            BonusRule::new("Luxury", Condition::PriceAbove(Price::whole(400)), 2),
            BonusRule::new(
                "Family",
                Condition::HasAnyAmenity(vec!["Pool".to_owned(), "Heated Pool".to_owned()]),
                5,
            ),
            BonusRule::new("Family", amenity("Free Breakfast"), 3),
            BonusRule::new("Boutique", Condition::CategoryIs(Category::Boutique), 5),
        ];
        Self {
            weights: MatchWeights::default(),
            rules,
        }
    }
}

/// Load and validate a JSON rule table from `path`.
///
/// # Errors
/// Returns [`RuleTableError::Open`] when the file cannot be read,
/// [`RuleTableError::Parse`] for malformed JSON, and
/// [`RuleTableError::InvalidRule`] when a rule fails validation.
pub fn load_rule_table(path: &Utf8Path) -> Result<RuleTable, RuleTableError> {
    let contents =
        staysuite_fs::read_utf8_to_string(path).map_err(|source| RuleTableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let table: RuleTable =
        serde_json::from_str(&contents).map_err(|source| RuleTableError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    table.validate()?;
    log::debug!("loaded {} bonus rules from {path}", table.rules.len());
    Ok(table)
}
