//! Whole-stay quotes.

use tabled::{Table, Tabled};

use crate::cli::{output, StayArgs};
use crate::domain::StayQuery;
use crate::error::Result;
use crate::resolver::PriceResolver;

#[derive(Tabled)]
struct NightRow {
    #[tabled(rename = "Night")]
    date: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Final")]
    final_price: String,
}

/// Price every night of a stay from a JSON `StayQuery`.
pub fn execute(args: &StayArgs) -> Result<()> {
    let config = args.input.prepare()?;
    let query: StayQuery = args.input.read_request()?;

    let resolver = PriceResolver::from_config(&config.pricing);
    let quote = resolver.quote_stay(&query)?;

    if args.input.json {
        return output::json(&quote);
    }

    output::section(&format!(
        "Stay {} → {} ({} nights, {})",
        quote.check_in,
        quote.check_out,
        quote.night_count(),
        resolver.currency().code
    ));

    let rows = quote.nights.iter().map(|night| NightRow {
        date: night.date.to_string(),
        base: night.breakdown.base_price.to_string(),
        discount: night.breakdown.discount_amount.to_string(),
        final_price: night.breakdown.final_price.to_string(),
    });
    output::table(&Table::new(rows).to_string());

    println!();
    output::key_value("Base total", quote.base_total);
    output::key_value("Discount total", quote.discount_total);
    output::key_value("Final total", quote.final_total);
    println!();
    Ok(())
}
