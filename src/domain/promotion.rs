//! Promotion rules: percentage or fixed-amount discounts with optional windows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::{within, DateField};
use super::money::Price;

/// Highest percentage that still makes sense; larger values are capped.
const FULL_DISCOUNT: Decimal = Decimal::ONE_HUNDRED;

/// A discount rule attached to a listing.
///
/// At most one of `discount_percentage` and `discount_amount` is expected to
/// be set. When both are, the percentage wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    pub discount_amount: Option<Price>,
    #[serde(default)]
    pub start_date: DateField,
    #[serde(default)]
    pub end_date: DateField,
}

/// How a promotion's dates restrict when it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionWindow {
    /// No usable restriction: the promotion is always on.
    Unrestricted,
    /// Applies on `[start, end]` inclusive.
    Between(NaiveDate, NaiveDate),
    /// A date was present but unreadable; the promotion never applies.
    Invalid,
}

/// The discount a promotion actually grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Percentage off, in `(0, 100]`.
    Percentage(Decimal),
    /// Fixed amount off, greater than zero.
    Amount(Price),
}

impl Promotion {
    pub fn percentage(percent: Decimal) -> Self {
        Self {
            discount_percentage: Some(percent),
            ..Self::default()
        }
    }

    pub fn amount(amount: Price) -> Self {
        Self {
            discount_amount: Some(amount),
            ..Self::default()
        }
    }

    /// Restrict this promotion to `[start, end]`.
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// The effective discount, if the promotion carries one.
    ///
    /// Non-positive values count as unset. Percentage is checked first.
    #[must_use]
    pub fn discount(&self) -> Option<Discount> {
        if let Some(percent) = self.discount_percentage.filter(|p| *p > Decimal::ZERO) {
            return Some(Discount::Percentage(percent.min(FULL_DISCOUNT)));
        }
        self.discount_amount
            .filter(|a| *a > Decimal::ZERO)
            .map(Discount::Amount)
    }

    /// Interpret the promotion's dates.
    ///
    /// A window restricts only when both bounds are valid dates. A single
    /// missing bound leaves the promotion unrestricted; any malformed bound
    /// disables it.
    #[must_use]
    pub fn window(&self) -> PromotionWindow {
        match (self.start_date, self.end_date) {
            (DateField::Malformed, _) | (_, DateField::Malformed) => PromotionWindow::Invalid,
            (DateField::Date(start), DateField::Date(end)) => PromotionWindow::Between(start, end),
            _ => PromotionWindow::Unrestricted,
        }
    }

    /// True when the promotion grants a discount on `on`.
    #[must_use]
    pub fn is_active_on(&self, on: NaiveDate) -> bool {
        if self.discount().is_none() {
            return false;
        }
        match self.window() {
            PromotionWindow::Unrestricted => true,
            PromotionWindow::Between(start, end) => within(on, start, end),
            PromotionWindow::Invalid => false,
        }
    }
}

impl Discount {
    /// Apply the discount to `base`, never going below zero.
    #[must_use]
    pub fn apply(self, base: Price) -> Price {
        let discounted = match self {
            Self::Percentage(percent) => base * (Decimal::ONE - percent / FULL_DISCOUNT),
            Self::Amount(amount) => base - amount,
        };
        discounted.max(Decimal::ZERO)
    }
}
