//! Condotel pricing - nightly price resolution for condo-hotel listings.
//!
//! A listing has a default nightly rate. Hosts can override it for a date
//! window (an "active price") and attach a promotion that takes a percentage
//! or a fixed amount off. This crate decides what a guest pays per night and
//! for a whole stay.
//!
//! # Modules
//!
//! - [`domain`] - Rate overrides, promotions, and the pure resolution rules
//! - [`resolver`] - [`resolver::PriceResolver`], which binds a clock and a currency
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - The `condotel-pricing` command-line interface
//!
//! # Example
//!
//! ```
//! use condotel_pricing::domain::{Currency, FixedClock, PriceQuery, Promotion};
//! use condotel_pricing::resolver::PriceResolver;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let resolver = PriceResolver::new(FixedClock(today), Currency::default());
//!
//! let query = PriceQuery::new(dec!(1000000)).with_promotion(Promotion::percentage(dec!(20)));
//! let price = resolver.quote(&query);
//!
//! assert_eq!(price.final_price, dec!(800000));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
