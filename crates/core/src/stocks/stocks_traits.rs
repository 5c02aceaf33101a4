use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::company::CompanyInfo;
use crate::intraday::IntradayInfo;
use crate::listings::CompanyListing;
use crate::resource::Resource;

/// Trait for stock repository operations
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    /// Streams the listings matching `query`.
    ///
    /// Emits `Loading(true)`, the cached matches, then either `Loading(false)`
    /// when the cache is served, or the refreshed listings followed by
    /// `Loading(false)`. A failed refresh ends the stream with `Error`.
    /// The remote feed is consulted when `fetch_from_remote` is set or when
    /// the cache is empty and the query is blank.
    fn get_company_listings(
        &self,
        fetch_from_remote: bool,
        query: String,
    ) -> BoxStream<'static, Resource<Vec<CompanyListing>>>;

    async fn get_intraday_infos(&self, symbol: &str) -> Resource<Vec<IntradayInfo>>;

    async fn get_company_info(&self, symbol: &str) -> Resource<CompanyInfo>;
}
