use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use log::{debug, error, info, warn};
use stockmarket_market_data::{FailureKind, StockDataProvider};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::company::CompanyInfo;
use crate::constants::{API_LIMIT_MESSAGE, RESOURCE_CHANNEL_CAPACITY};
use crate::csv_parser::CsvParser;
use crate::errors::{Error, ValidationError};
use crate::intraday::{IntradayInfo, IntradayInfoParser};
use crate::listings::{CompanyListing, CompanyListingsParser, ListingStoreTrait};
use crate::resource::Resource;
use crate::stocks::stocks_traits::StockRepositoryTrait;
use crate::Result;

type ListingsSender = mpsc::Sender<Resource<Vec<CompanyListing>>>;

/// Cache-first repository over a listing store and a remote provider.
#[derive(Clone)]
pub struct StockRepository {
    store: Arc<dyn ListingStoreTrait>,
    provider: Arc<dyn StockDataProvider>,
    listings_parser: Arc<dyn CsvParser<CompanyListing>>,
    intraday_parser: Arc<dyn CsvParser<IntradayInfo>>,
}

impl StockRepository {
    pub fn new(store: Arc<dyn ListingStoreTrait>, provider: Arc<dyn StockDataProvider>) -> Self {
        Self::with_parsers(
            store,
            provider,
            Arc::new(CompanyListingsParser::new()),
            Arc::new(IntradayInfoParser::new()),
        )
    }

    pub fn with_parsers(
        store: Arc<dyn ListingStoreTrait>,
        provider: Arc<dyn StockDataProvider>,
        listings_parser: Arc<dyn CsvParser<CompanyListing>>,
        intraday_parser: Arc<dyn CsvParser<IntradayInfo>>,
    ) -> Self {
        Self {
            store,
            provider,
            listings_parser,
            intraday_parser,
        }
    }

    async fn fetch_remote_listings(&self) -> Result<Vec<CompanyListing>> {
        let content = self.provider.get_listings_csv().await?;
        self.listings_parser.parse(&content)
    }

    /// Drives one listings load, stopping early once the receiver is gone.
    async fn load_company_listings(self, fetch_from_remote: bool, query: String, tx: ListingsSender) {
        if tx.send(Resource::Loading(true)).await.is_err() {
            return;
        }

        let local = match self.store.search_listings(&query) {
            Ok(local) => local,
            Err(e) => {
                let context = format!("Failed to search cached listings for '{}'", query);
                let _ = tx.send(failed(&context, &e)).await;
                return;
            }
        };
        let is_db_empty = local.is_empty() && query.trim().is_empty();
        if tx.send(Resource::Success(local)).await.is_err() {
            return;
        }

        if !is_db_empty && !fetch_from_remote {
            let _ = tx.send(Resource::Loading(false)).await;
            return;
        }

        let remote = match self.fetch_remote_listings().await {
            Ok(remote) => remote,
            Err(e) => {
                let _ = tx.send(failed("Failed to refresh company listings", &e)).await;
                return;
            }
        };

        // Stored even if the consumer went away during the download.
        let fetched = remote.len();
        if let Err(e) = self.store.replace_listings(remote).await {
            let _ = tx
                .send(failed("Failed to store refreshed company listings", &e))
                .await;
            return;
        }
        info!("Refreshed company listings cache with {} rows", fetched);

        match self.store.search_listings("") {
            Ok(fresh) => {
                if tx.send(Resource::Success(fresh)).await.is_ok() {
                    let _ = tx.send(Resource::Loading(false)).await;
                }
            }
            Err(e) => {
                let _ = tx
                    .send(failed("Failed to read refreshed company listings", &e))
                    .await;
            }
        }
    }
}

/// Logs a failed call and turns it into an `Error` carrying the error's text.
///
/// I/O and HTTP failures are remote trouble and log as warnings.
fn failed<T>(context: &str, err: &Error) -> Resource<T> {
    match err.failure_kind() {
        kind @ (FailureKind::Io | FailureKind::Http) => {
            warn!("{} ({:?} failure): {}", context, kind, err)
        }
        FailureKind::Unknown => error!("{}: {}", context, err),
    }
    Resource::Error(err.to_string())
}

fn require_symbol(symbol: &str) -> Result<&str> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ValidationError::InvalidInput("Symbol must not be empty".to_string()).into());
    }
    Ok(symbol)
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    fn get_company_listings(
        &self,
        fetch_from_remote: bool,
        query: String,
    ) -> BoxStream<'static, Resource<Vec<CompanyListing>>> {
        debug!(
            "Loading company listings (query: '{}', fetch_from_remote: {})",
            query, fetch_from_remote
        );
        let (tx, rx) = mpsc::channel(RESOURCE_CHANNEL_CAPACITY);

        let repository = self.clone();
        tokio::spawn(async move {
            repository
                .load_company_listings(fetch_from_remote, query, tx)
                .await;
        });

        Box::pin(ReceiverStream::new(rx))
    }

    async fn get_intraday_infos(&self, symbol: &str) -> Resource<Vec<IntradayInfo>> {
        let result = async {
            let symbol = require_symbol(symbol)?;
            let content = self.provider.get_intraday_csv(symbol).await?;
            self.intraday_parser.parse(&content)
        }
        .await;

        match result {
            Ok(bars) => {
                debug!("Loaded {} intraday bars for {}", bars.len(), symbol);
                Resource::Success(bars)
            }
            Err(e) => failed(&format!("Failed to load intraday bars for {}", symbol), &e),
        }
    }

    async fn get_company_info(&self, symbol: &str) -> Resource<CompanyInfo> {
        let result: Result<_> = async {
            let symbol = require_symbol(symbol)?;
            Ok(self.provider.get_company_overview(symbol).await?)
        }
        .await;

        match result {
            Ok(overview) => match CompanyInfo::from_overview(overview) {
                Some(info) => Resource::Success(info),
                None => {
                    info!("Company overview for {} came back without a name", symbol);
                    Resource::Error(API_LIMIT_MESSAGE.to_string())
                }
            },
            Err(Error::MarketData(e)) if e.is_rate_limited() => {
                info!("Company overview for {} was rate limited", symbol);
                Resource::Error(API_LIMIT_MESSAGE.to_string())
            }
            Err(e) => failed(&format!("Failed to load company info for {}", symbol), &e),
        }
    }
}
