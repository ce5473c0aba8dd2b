//! Price quotes for a stay at a listing.
//!
//! Amounts are [`Price`] values, so fractional nightly rates are quoted to
//! the cent. The booking flow charges a flat service fee and no cleaning fee.

use thiserror::Error;

use crate::{Listing, Price};

/// Nights quoted when the caller does not choose a length of stay.
pub const DEFAULT_NIGHTS: u32 = 3;
/// Flat fee added to every booking.
pub const SERVICE_FEE: Price = Price::whole(45);
/// Cleaning fee added to every booking.
pub const CLEANING_FEE: Price = Price::ZERO;

/// Errors returned by [`StayQuote::for_listing`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The stay was zero nights long.
    #[error("a stay must last at least one night")]
    NoNights,
    /// The total exceeds the largest representable price.
    #[error("quote for listing {id} over {nights} nights overflows")]
    Overflow {
        /// Listing being quoted.
        id: String,
        /// Requested nights.
        nights: u32,
    },
}

/// Itemised price for a stay.
///
/// # Examples
/// ```
/// use staysuite_core::{Catalog, Price, StayQuote, DEFAULT_NIGHTS};
///
/// # fn main() -> Result<(), staysuite_core::QuoteError> {
/// let catalog = Catalog::featured();
/// let listing = catalog.get("h1").expect("seeded listing");
/// let quote = StayQuote::for_listing(listing, DEFAULT_NIGHTS)?;
/// assert_eq!(quote.subtotal, Price::whole(1350));
/// assert_eq!(quote.total, Price::whole(1395));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StayQuote {
    /// Listing being quoted.
    pub listing_id: String,
    /// Price per night.
    pub nightly_price: Price,
    /// Length of stay.
    pub nights: u32,
    /// `nightly_price * nights`.
    pub subtotal: Price,
    /// Flat service fee.
    pub service_fee: Price,
    /// Cleaning fee.
    pub cleaning_fee: Price,
    /// Amount charged at checkout.
    pub total: Price,
}

impl StayQuote {
    /// Quote `nights` at `listing`.
    ///
    /// # Errors
    /// Returns [`QuoteError::NoNights`] for a zero-night stay and
    /// [`QuoteError::Overflow`] when the total exceeds `u32::MAX` units.
    pub fn for_listing(listing: &Listing, nights: u32) -> Result<Self, QuoteError> {
        if nights == 0 {
            return Err(QuoteError::NoNights);
        }
        let overflow = || QuoteError::Overflow {
            id: listing.id.clone(),
            nights,
        };
        let subtotal = listing
            .nightly_price
            .checked_mul(nights)
            .ok_or_else(overflow)?;
        let total = subtotal
            .checked_add(SERVICE_FEE)
            .and_then(|sum| sum.checked_add(CLEANING_FEE))
            .ok_or_else(overflow)?;
        Ok(Self {
            listing_id: listing.id.clone(),
            nightly_price: listing.nightly_price,
            nights,
            subtotal,
            service_fee: SERVICE_FEE,
            cleaning_fee: CLEANING_FEE,
            total,
        })
    }
}
