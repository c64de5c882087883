//! Price resolution bound to a clock and a currency.
//!
//! [`PriceResolver`] is what call sites hold. It fixes the reference date once
//! per call, delegates to the pure functions in [`crate::domain`], and rounds
//! the result to the currency's minor unit.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::PricingConfig;
use crate::domain::{
    resolve_final_price, stay_nights, Clock, Currency, NightQuote, PriceBreakdown, PriceQuery,
    StayQuery, StayQuote, SystemClock,
};
use crate::error::Result;

/// Default stay limit when none is configured.
pub const DEFAULT_MAX_STAY_NIGHTS: u32 = 365;

/// Resolves nightly and stay prices.
#[derive(Debug, Clone)]
pub struct PriceResolver<C = SystemClock> {
    clock: C,
    currency: Currency,
    max_stay_nights: u32,
}

impl PriceResolver<SystemClock> {
    /// Build a resolver on the wall clock from configuration.
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(SystemClock::new(config.utc_offset()), config.currency())
            .with_max_stay_nights(config.max_stay_nights)
    }
}

impl<C: Clock> PriceResolver<C> {
    pub fn new(clock: C, currency: Currency) -> Self {
        Self {
            clock,
            currency,
            max_stay_nights: DEFAULT_MAX_STAY_NIGHTS,
        }
    }

    #[must_use]
    pub fn with_max_stay_nights(mut self, max_stay_nights: u32) -> Self {
        self.max_stay_nights = max_stay_nights;
        self
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The query's reference date, or today if it has none.
    pub fn reference_date(&self, query: &PriceQuery) -> NaiveDate {
        query.reference_date.unwrap_or_else(|| self.clock.today())
    }

    /// Price one night.
    ///
    /// The reference date is captured once so the override and the promotion
    /// are judged against the same day.
    pub fn quote(&self, query: &PriceQuery) -> PriceBreakdown {
        let on = self.reference_date(query);
        let raw = resolve_final_price(
            query.price_per_night,
            query.active_price.as_ref(),
            query.promotion.as_ref(),
            on,
        );
        let breakdown = self.round(raw);

        debug!(
            %on,
            base_price = %breakdown.base_price,
            final_price = %breakdown.final_price,
            discount = %breakdown.discount_amount,
            currency = %self.currency.code,
            "Quoted night"
        );

        breakdown
    }

    /// Price every night of a stay.
    ///
    /// # Errors
    ///
    /// Returns a domain error when check-out is not after check-in, the stay
    /// exceeds the configured night limit, or a total overflows.
    pub fn quote_stay(&self, query: &StayQuery) -> Result<StayQuote> {
        let nights = stay_nights(query, self.max_stay_nights).map_err(|e| {
            warn!(
                check_in = %query.check_in,
                check_out = %query.check_out,
                error = %e,
                "Rejected stay"
            );
            e
        })?;

        let nights: Vec<NightQuote> = nights
            .into_iter()
            .map(|date| NightQuote {
                date,
                breakdown: self.quote(&query.night(date)),
            })
            .collect();
        let quote = StayQuote::from_nights(query.check_in, query.check_out, nights)?;

        debug!(
            nights = quote.night_count(),
            final_total = %quote.final_total,
            discount_total = %quote.discount_total,
            "Quoted stay"
        );

        Ok(quote)
    }

    /// Round both prices to the minor unit and derive the discount from the
    /// rounded values. Rounding is monotone, so the discount stays >= 0.
    fn round(&self, raw: PriceBreakdown) -> PriceBreakdown {
        let base_price = self.currency.round(raw.base_price);
        let final_price = self.currency.round(raw.final_price);
        PriceBreakdown {
            base_price,
            final_price,
            discount_amount: base_price - final_price,
        }
    }
}
