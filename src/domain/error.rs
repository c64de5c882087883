//! Domain validation errors.
//!
//! Nightly price resolution itself never fails: absent or malformed optional
//! data degrades to the listed price. These errors cover the operations that
//! take caller-chosen ranges, such as quoting a stay.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use condotel_pricing::domain::error::DomainError;
//! use condotel_pricing::domain::{stay_nights, StayQuery};
//! use rust_decimal_macros::dec;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let query = StayQuery::new(dec!(1000000), day, day);
//!
//! assert!(matches!(
//!     stay_nights(&query, 30),
//!     Err(DomainError::EmptyStay { .. })
//! ));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that occur when a stay request violates domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Check-out must fall strictly after check-in.
    #[error("check-out {check_out} must be after check-in {check_in}")]
    EmptyStay {
        /// Requested check-in date.
        check_in: NaiveDate,
        /// Requested check-out date.
        check_out: NaiveDate,
    },

    /// The stay spans more nights than the configured limit.
    #[error("stay of {nights} nights exceeds the limit of {limit}")]
    StayTooLong {
        /// Number of nights requested.
        nights: i64,
        /// Maximum nights accepted.
        limit: u32,
    },

    /// A stay total is too large to represent.
    #[error("stay total overflows the price range")]
    TotalOverflow,
}
