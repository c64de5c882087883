//! Listing-agnostic pricing domain.

pub mod calendar;
pub mod error;

mod money;
mod nightly_price;
mod pricing;
mod promotion;
mod stay;

pub use calendar::{Clock, DateField, FixedClock, SystemClock};
pub use money::{Currency, Price, MAX_MINOR_UNITS};
pub use nightly_price::NightlyPrice;
pub use pricing::{
    apply_promotion, is_promotion_active, resolve_base_price, resolve_final_price, PriceBreakdown,
    PriceQuery,
};
pub use promotion::{Discount, Promotion, PromotionWindow};
pub use stay::{stay_nights, NightQuote, StayQuery, StayQuote};
