//! `hotels` command: one-shot mock hotel lookup

use crate::config::Config;
use crate::error::Result;
use crate::hotels::{HotelCatalog, HotelQuery, HotelRecord, HotelSource};
use crate::trip::BudgetTier;

use prettytable::{row, Table};

/// Arguments for the `hotels` command
#[derive(Debug, Clone)]
pub struct HotelsArgs {
    pub destination: String,
    pub check_in: String,
    pub check_out: String,
    pub budget: String,
    pub json: bool,
}

/// Looks up hotels and prints them as a table or JSON
///
/// # Errors
///
/// Returns an error when required arguments are empty.
pub async fn run(config: Config, args: HotelsArgs) -> Result<()> {
    let catalog = HotelCatalog::new(&config.hotels);
    let query = HotelQuery {
        destination: args.destination,
        check_in: args.check_in,
        check_out: args.check_out,
        budget: BudgetTier::from(args.budget),
    };

    let hotels = catalog.lookup(&query).await?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "hotels": hotels }))?
        );
    } else {
        print_table(&hotels);
    }
    Ok(())
}

/// Renders hotel records as an aligned table
fn print_table(hotels: &[HotelRecord]) {
    let mut table = Table::new();
    table.add_row(row!["NAME", "STARS", "RATING", "LOCATION", "PRICE"]);
    for hotel in hotels {
        table.add_row(row![
            hotel.name,
            hotel.stars,
            format!("{:.1}", hotel.rating),
            hotel.location,
            format!("{} {}", hotel.price, hotel.currency),
        ]);
    }
    table.printstd();
}
