//! Diagnostic checks.

mod config;

pub use config::execute_config;
