//! Multi-night stays priced night by night.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::required;
use super::error::DomainError;
use super::money::Price;
use super::nightly_price::NightlyPrice;
use super::pricing::{PriceBreakdown, PriceQuery};
use super::promotion::Promotion;

/// A request to price every night between check-in and check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    pub price_per_night: Price,
    #[serde(default)]
    pub active_price: Option<NightlyPrice>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
    #[serde(deserialize_with = "required::deserialize")]
    pub check_in: NaiveDate,
    /// Departure day; not charged.
    #[serde(deserialize_with = "required::deserialize")]
    pub check_out: NaiveDate,
}

impl StayQuery {
    pub fn new(price_per_night: Price, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            price_per_night,
            active_price: None,
            promotion: None,
            check_in,
            check_out,
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

    /// The single-night query for `night`.
    pub fn night(&self, night: NaiveDate) -> PriceQuery {
        PriceQuery {
            price_per_night: self.price_per_night,
            active_price: self.active_price.clone(),
            promotion: self.promotion.clone(),
            reference_date: Some(night),
        }
    }
}

/// One charged night of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NightQuote {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

/// Per-night prices for a stay plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: Vec<NightQuote>,
    pub base_total: Price,
    pub final_total: Price,
    pub discount_total: Price,
}

impl StayQuote {
    /// Sum per-night quotes into a stay quote.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TotalOverflow`] when a total does not fit in a
    /// [`Price`].
    pub fn from_nights(
        check_in: NaiveDate,
        check_out: NaiveDate,
        nights: Vec<NightQuote>,
    ) -> Result<Self, DomainError> {
        let totals = nights.iter().try_fold(
            (Price::ZERO, Price::ZERO, Price::ZERO),
            |(base, fin, disc), night| {
                let b = &night.breakdown;
                Some((
                    base.checked_add(b.base_price)?,
                    fin.checked_add(b.final_price)?,
                    disc.checked_add(b.discount_amount)?,
                ))
            },
        );
        let (base_total, final_total, discount_total) = totals.ok_or(DomainError::TotalOverflow)?;

        Ok(Self {
            check_in,
            check_out,
            nights,
            base_total,
            final_total,
            discount_total,
        })
    }

    pub fn night_count(&self) -> usize {
        self.nights.len()
    }
}

/// The charged nights of a stay: check-in through the day before check-out.
///
/// # Errors
///
/// Returns [`DomainError::EmptyStay`] when check-out is not after check-in and
/// [`DomainError::StayTooLong`] when the stay exceeds `max_nights`.
pub fn stay_nights(query: &StayQuery, max_nights: u32) -> Result<Vec<NaiveDate>, DomainError> {
    let nights = (query.check_out - query.check_in).num_days();
    if nights <= 0 {
        return Err(DomainError::EmptyStay {
            check_in: query.check_in,
            check_out: query.check_out,
        });
    }
    if nights > i64::from(max_nights) {
        return Err(DomainError::StayTooLong {
            nights,
            limit: max_nights,
        });
    }

    Ok(query
        .check_in
        .iter_days()
        .take_while(|day| *day < query.check_out)
        .collect())
}
