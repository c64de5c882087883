//! Pricing configuration: currency, marketplace timezone, and stay limits.

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::domain::Currency;
use crate::resolver::DEFAULT_MAX_STAY_NIGHTS;

/// Pricing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Currency code listings are priced in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places results are rounded to (0 for VND, 2 for USD).
    #[serde(default)]
    pub minor_units: u32,
    /// Marketplace timezone as minutes east of UTC; decides what "today" is.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Longest stay accepted for a quote.
    #[serde(default = "default_max_stay_nights")]
    pub max_stay_nights: u32,
}

fn default_currency() -> String {
    "VND".into()
}

const fn default_utc_offset_minutes() -> i32 {
    7 * 60 // Asia/Ho_Chi_Minh
}

const fn default_max_stay_nights() -> u32 {
    DEFAULT_MAX_STAY_NIGHTS
}

impl PricingConfig {
    #[must_use]
    pub fn currency(&self) -> Currency {
        Currency::new(self.currency.clone(), self.minor_units)
    }

    /// The marketplace's UTC offset. Out-of-range values fall back to UTC;
    /// validation rejects them before this is reached.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            minor_units: 0,
            utc_offset_minutes: default_utc_offset_minutes(),
            max_stay_nights: default_max_stay_nights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vietnam() {
        let config = PricingConfig::default();

        assert_eq!(config.currency(), Currency::new("VND", 0));
        assert_eq!(config.utc_offset().local_minus_utc(), 7 * 3600);
        assert_eq!(config.max_stay_nights, 365);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = PricingConfig {
            utc_offset_minutes: 60 * 48,
            ..PricingConfig::default()
        };

        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }
}
