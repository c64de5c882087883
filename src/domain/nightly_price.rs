//! Time-bounded overrides of a listing's standard nightly rate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{within, DateField};
use super::money::Price;

/// A seasonal or host-set rate that replaces the listing's default price for
/// every night inside `[start_date, end_date]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlyPrice {
    #[serde(default)]
    pub base_price: Option<Price>,
    #[serde(default)]
    pub start_date: DateField,
    #[serde(default)]
    pub end_date: DateField,
}

impl NightlyPrice {
    pub fn new(base_price: Price, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            base_price: Some(base_price),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// True when both bounds are valid dates and `on` falls between them.
    ///
    /// Missing or malformed bounds never cover anything.
    #[must_use]
    pub fn covers(&self, on: NaiveDate) -> bool {
        match (self.start_date.date(), self.end_date.date()) {
            (Some(start), Some(end)) => within(on, start, end),
            _ => false,
        }
    }

    /// The override rate in effect on `on`, if any.
    #[must_use]
    pub fn rate_on(&self, on: NaiveDate) -> Option<Price> {
        self.base_price.filter(|_| self.covers(on))
    }
}
