use crate::csv_parser::{field, read_rows, CsvParser};
use crate::listings::listings_model::CompanyListing;
use crate::Result;

/// Parser for the LISTING_STATUS feed.
///
/// Expects `symbol,name,exchange` as the first three columns; further
/// columns (asset type, dates, status) are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyListingsParser;

impl CompanyListingsParser {
    pub fn new() -> Self {
        Self
    }
}

impl CsvParser<CompanyListing> for CompanyListingsParser {
    fn parse(&self, content: &[u8]) -> Result<Vec<CompanyListing>> {
        read_rows(content, "listing", |record| {
            let symbol = field(record, 0)?;
            let name = field(record, 1)?;
            let exchange = field(record, 2)?;
            if symbol.is_empty() {
                return None;
            }
            Some(CompanyListing::new(name, symbol, exchange))
        })
    }
}
