//! Monetary amounts held as whole cents.
//!
//! Listing catalogs quote prices as plain JSON numbers, fractional or not.
//! [`Price`] stores them in minor units so comparisons and quote arithmetic
//! stay exact. Amounts are capped at `u32::MAX` whole units.

use std::fmt;

use thiserror::Error;

const CENTS_PER_UNIT: u64 = 100;
const MAX_CENTS: u64 = 429_496_729_500;

/// A non-negative amount of money with cent precision.
///
/// # Examples
/// ```
/// use staysuite_core::Price;
///
/// # fn main() -> Result<(), staysuite_core::InvalidPrice> {
/// let fractional = Price::from_amount(400.5)?;
/// assert_eq!(fractional.cents(), 40_050);
/// assert!(fractional > Price::whole(400));
/// assert_eq!(fractional.to_string(), "400.50");
/// assert_eq!(Price::whole(450).to_string(), "450");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

/// Error returned when an amount cannot be represented as a [`Price`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a finite, non-negative price within range")]
pub struct InvalidPrice(pub String);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Price of `units` whole currency units.
    #[must_use]
    pub const fn whole(units: u32) -> Self {
        Self(units as u64 * CENTS_PER_UNIT)
    }

    /// Price from an exact number of cents.
    ///
    /// # Errors
    /// Returns [`InvalidPrice`] above the `u32::MAX` unit cap.
    pub fn from_cents(cents: u64) -> Result<Self, InvalidPrice> {
        if cents > MAX_CENTS {
            return Err(InvalidPrice(format!("{cents} cents")));
        }
        Ok(Self(cents))
    }

    /// Price from a decimal amount, rounded to the nearest cent.
    ///
    /// # Errors
    /// Returns [`InvalidPrice`] for NaN, infinite, negative or oversized
    /// amounts.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "decimal amounts are converted to cents once at the boundary"
    )]
    pub fn from_amount(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() || amount < 0.0 || amount > f64::from(u32::MAX) {
            return Err(InvalidPrice(amount.to_string()));
        }
        Self::from_cents((amount * 100.0).round() as u64)
    }

    /// Amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Report whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Report whether the amount has no fractional cents.
    #[must_use]
    pub const fn is_whole(self) -> bool {
        matches!(self.0.checked_rem(CENTS_PER_UNIT), Some(0))
    }

    /// Multiply by a count, or `None` past the unit cap.
    #[must_use]
    pub fn checked_mul(self, count: u32) -> Option<Self> {
        self.0
            .checked_mul(u64::from(count))
            .and_then(|cents| Self::from_cents(cents).ok())
    }

    /// Add two prices, or `None` past the unit cap.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .and_then(|cents| Self::from_cents(cents).ok())
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "fractional amounts are written back as JSON numbers"
    )]
    const fn as_amount(self) -> f64 {
        self.0 as f64 / 100.0
    }

    const fn units_and_cents(self) -> (u64, u64) {
        match (
            self.0.checked_div(CENTS_PER_UNIT),
            self.0.checked_rem(CENTS_PER_UNIT),
        ) {
            (Some(units), Some(cents)) => (units, cents),
            _ => (0, 0),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (units, cents) = self.units_and_cents();
        if cents == 0 {
            write!(f, "{units}")
        } else {
            write!(f, "{units}.{cents:02}")
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.units_and_cents().0)
        } else {
            serializer.serialize_f64(self.as_amount())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(feature = "serde")]
struct PriceVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative price")
    }

    fn visit_u64<E: serde::de::Error>(self, units: u64) -> Result<Price, E> {
        units
            .checked_mul(CENTS_PER_UNIT)
            .ok_or_else(|| InvalidPrice(units.to_string()))
            .and_then(Price::from_cents)
            .map_err(E::custom)
    }

    fn visit_i64<E: serde::de::Error>(self, units: i64) -> Result<Price, E> {
        u64::try_from(units)
            .map_err(|_| E::custom(InvalidPrice(units.to_string())))
            .and_then(|whole| self.visit_u64(whole))
    }

    fn visit_f64<E: serde::de::Error>(self, amount: f64) -> Result<Price, E> {
        Price::from_amount(amount).map_err(E::custom)
    }
}
