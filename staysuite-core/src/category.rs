//! Listing categories.
//!
//! The enum offers compile-time safety for category lookups while keeping the
//! canonical tag spelling that preference profiles match against.
//!
//! # Examples
//! ```
//! use staysuite_core::Category;
//!
//! assert_eq!(Category::Luxury.as_str(), "Luxury");
//! assert_eq!(Category::Resort.to_string(), "Resort");
//! ```

use thiserror::Error;

/// Broad kind of property a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// High-end hotels.
    Luxury,
    /// Small independent hotels with a distinct style.
    Boutique,
    /// Destination resorts.
    Resort,
    /// Hotels aimed at business travellers.
    Business,
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 4] = [Self::Luxury, Self::Boutique, Self::Resort, Self::Business];

    /// Return the canonical tag for the category.
    ///
    /// # Examples
    /// ```
    /// use staysuite_core::Category;
    ///
    /// assert_eq!(Category::Boutique.as_str(), "Boutique");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Luxury => "Luxury",
            Self::Boutique => "Boutique",
            Self::Resort => "Resort",
            Self::Business => "Business",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Category::Business.to_string(), Category::Business.as_str());
    }

    #[rstest]
    #[case("Luxury", Category::Luxury)]
    #[case("boutique", Category::Boutique)]
    #[case(" RESORT ", Category::Resort)]
    fn parsing_ignores_case(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(raw), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("Hostel").unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }
}
