//! Builders for pricing primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions rather
//! than construction boilerplate.

use chrono::NaiveDate;

use crate::domain::{Currency, FixedClock, NightlyPrice, Price};
use crate::resolver::PriceResolver;

/// Create a calendar date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// An active-price override covering `[start, end]`.
pub fn override_between(rate: Price, start: NaiveDate, end: NaiveDate) -> NightlyPrice {
    NightlyPrice::new(rate, start, end)
}

/// A VND resolver whose clock always reads `today`.
pub fn resolver_on(today: NaiveDate) -> PriceResolver<FixedClock> {
    PriceResolver::new(FixedClock(today), Currency::default())
}

/// A resolver in `currency` whose clock always reads `today`.
pub fn resolver_in(currency: Currency, today: NaiveDate) -> PriceResolver<FixedClock> {
    PriceResolver::new(FixedClock(today), currency)
}
