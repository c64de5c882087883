use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate a configuration file without quoting anything.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;
    let pricing = &config.pricing;

    output::ok("Configuration file is valid");
    output::section("Summary");
    output::key_value(
        "Currency",
        format!("{} ({} minor units)", pricing.currency, pricing.minor_units),
    );
    output::key_value("UTC offset", pricing.utc_offset());
    output::key_value("Max stay", format!("{} nights", pricing.max_stay_nights));
    output::key_value("Log level", &config.logging.level);
    output::key_value(
        "Log format",
        format!("{:?}", config.logging.format).to_lowercase(),
    );
    println!();

    Ok(())
}
