//! Stock data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::CompanyOverview;

/// Trait for remote stock data sources.
///
/// Providers only move bytes: tabular feeds come back as raw CSV so the
/// caller can pick its own parser, JSON documents come back deserialised
/// but unvalidated.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockmarket_market_data::{CompanyOverview, MarketDataError, StockDataProvider};
///
/// struct FixtureProvider;
///
/// #[async_trait]
/// impl StockDataProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn get_listings_csv(&self) -> Result<Vec<u8>, MarketDataError> {
///         Ok(b"symbol,name,exchange\nA,Agilent,NYSE\n".to_vec())
///     }
///
///     // ... implement the remaining calls
/// }
/// ```
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    fn id(&self) -> &'static str;

    /// Fetch the full listing-status feed as CSV.
    ///
    /// Columns: `symbol,name,exchange,...`, header row included.
    async fn get_listings_csv(&self) -> Result<Vec<u8>, MarketDataError>;

    /// Fetch hourly intraday bars for a symbol as CSV.
    ///
    /// Columns: `timestamp,open,high,low,close,volume`, header row included.
    async fn get_intraday_csv(&self, symbol: &str) -> Result<Vec<u8>, MarketDataError>;

    /// Fetch the company overview document for a symbol.
    async fn get_company_overview(&self, symbol: &str)
        -> Result<CompanyOverview, MarketDataError>;
}
