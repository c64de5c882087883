//! Configuration loading and validation.

pub mod logging;
pub mod pricing;
pub mod settings;

pub use logging::{LogFormat, LoggingConfig};
pub use pricing::PricingConfig;
pub use settings::Config;
