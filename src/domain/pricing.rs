//! Nightly price resolution.
//!
//! Three steps turn a listing's default rate into what a guest pays for one
//! night:
//!
//! 1. [`resolve_base_price`] swaps in an active-price override when the
//!    reference date falls inside its window.
//! 2. [`is_promotion_active`] decides whether a promotion applies on that date.
//! 3. [`apply_promotion`] takes the discount off, floored at zero.
//!
//! [`resolve_final_price`] runs all three against a single reference date.
//! None of these functions fail: missing or malformed optional data degrades
//! to the undiscounted listed price.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use condotel_pricing::domain::{resolve_final_price, Promotion};
//! use rust_decimal_macros::dec;
//!
//! let on = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let promo = Promotion::percentage(dec!(20));
//!
//! let price = resolve_final_price(dec!(1000000), None, Some(&promo), on);
//!
//! assert_eq!(price.final_price, dec!(800000));
//! assert_eq!(price.discount_amount, dec!(200000));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::calendar::required;
use super::money::Price;
use super::nightly_price::NightlyPrice;
use super::promotion::Promotion;

/// Everything needed to price one night of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    /// The listing's undiscounted nightly rate.
    pub price_per_night: Price,
    #[serde(default)]
    pub active_price: Option<NightlyPrice>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
    /// Date to price. Defaults to today when absent.
    #[serde(default, deserialize_with = "required::deserialize_option")]
    pub reference_date: Option<NaiveDate>,
}

impl PriceQuery {
    pub fn new(price_per_night: Price) -> Self {
        Self {
            price_per_night,
            active_price: None,
            promotion: None,
            reference_date: None,
        }
    }

    #[must_use]
    pub fn with_active_price(mut self, active_price: NightlyPrice) -> Self {
        self.active_price = Some(active_price);
        self
    }

    #[must_use]
    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

/// Result of pricing one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Rate before discount, after any active-price override.
    pub base_price: Price,
    /// Rate after discount, never negative.
    pub final_price: Price,
    /// `base_price - final_price`, never negative.
    pub discount_amount: Price,
}

impl PriceBreakdown {
    /// A breakdown with no discount.
    pub fn undiscounted(price: Price) -> Self {
        Self {
            base_price: price,
            final_price: price,
            discount_amount: Price::ZERO,
        }
    }
}

/// The nightly rate before promotions.
///
/// Returns the active price's rate when it has one and `on` lies within its
/// window, otherwise `price_per_night`. A negative rate counts as zero.
pub fn resolve_base_price(
    price_per_night: Price,
    active_price: Option<&NightlyPrice>,
    on: NaiveDate,
) -> Price {
    active_price
        .and_then(|active| active.rate_on(on))
        .unwrap_or(price_per_night)
        .max(Price::ZERO)
}

/// Whether `promotion` grants a discount on `on`.
pub fn is_promotion_active(promotion: Option<&Promotion>, on: NaiveDate) -> bool {
    promotion.is_some_and(|promo| promo.is_active_on(on))
}

/// Apply `promotion` to `base_price` if it is active on `on`.
pub fn apply_promotion(base_price: Price, promotion: Option<&Promotion>, on: NaiveDate) -> Price {
    match promotion {
        Some(promo) if promo.is_active_on(on) => promo
            .discount()
            .map_or(base_price, |discount| discount.apply(base_price)),
        _ => base_price,
    }
}

/// Price one night on `on`, using that date for both the override and the
/// promotion check.
pub fn resolve_final_price(
    price_per_night: Price,
    active_price: Option<&NightlyPrice>,
    promotion: Option<&Promotion>,
    on: NaiveDate,
) -> PriceBreakdown {
    let base_price = resolve_base_price(price_per_night, active_price, on);
    let final_price = apply_promotion(base_price, promotion, on);

    trace!(%on, %base_price, %final_price, "Resolved nightly price");

    PriceBreakdown {
        base_price,
        final_price,
        discount_amount: base_price - final_price,
    }
}
