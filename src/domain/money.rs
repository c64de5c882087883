//! Monetary types for nightly rates and discounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Largest scale a `Decimal` can carry.
pub const MAX_MINOR_UNITS: u32 = 28;

/// Currency a listing is priced in.
///
/// Only the number of minor units matters for arithmetic: results are rounded
/// to that many decimal places once the computation is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code, e.g. `VND` or `USD`.
    pub code: String,
    /// Decimal places of the smallest unit (0 for VND, 2 for USD).
    pub minor_units: u32,
}

impl Currency {
    pub fn new(code: impl Into<String>, minor_units: u32) -> Self {
        Self {
            code: code.into(),
            minor_units: minor_units.min(MAX_MINOR_UNITS),
        }
    }

    /// Round an amount to this currency's minor unit, midpoint away from zero.
    #[must_use]
    pub fn round(&self, amount: Price) -> Price {
        amount.round_dp_with_strategy(self.minor_units, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("VND", 0)
    }
}
