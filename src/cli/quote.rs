//! Single-night quotes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::{output, QuoteArgs};
use crate::domain::{PriceBreakdown, PriceQuery};
use crate::error::Result;
use crate::resolver::PriceResolver;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput<'a> {
    reference_date: NaiveDate,
    currency: &'a str,
    #[serde(flatten)]
    breakdown: PriceBreakdown,
}

/// Price one night from a JSON `PriceQuery`.
pub fn execute(args: &QuoteArgs) -> Result<()> {
    let config = args.input.prepare()?;
    let mut query: PriceQuery = args.input.read_request()?;
    if let Some(on) = args.on {
        query.reference_date = Some(on);
    }

    let resolver = PriceResolver::from_config(&config.pricing);
    // Pin the date so the printed date is the one that was priced.
    let on = resolver.reference_date(&query);
    query.reference_date = Some(on);
    let breakdown = resolver.quote(&query);

    let report = QuoteOutput {
        reference_date: on,
        currency: &resolver.currency().code,
        breakdown,
    };

    if args.input.json {
        return output::json(&report);
    }

    output::section("Nightly price");
    output::key_value("Date", report.reference_date);
    output::key_value("Currency", report.currency);
    output::key_value("Base price", breakdown.base_price);
    output::key_value("Discount", breakdown.discount_amount);
    output::key_value("Final price", breakdown.final_price);
    println!();
    Ok(())
}
