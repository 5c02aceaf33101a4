//! Alpha Vantage stock data provider implementation.
//!
//! This module talks to three Alpha Vantage endpoints:
//! - LISTING_STATUS for the full list of active listings (CSV)
//! - TIME_SERIES_INTRADAY at a 60 minute interval (CSV)
//! - OVERVIEW for company fundamentals (JSON)
//!
//! Note: Alpha Vantage free tier is limited to 25 API calls per day and
//! answers throttled calls with HTTP 200 and a JSON notice.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::CompanyOverview;
use crate::provider::StockDataProvider;

pub const BASE_URL: &str = "https://www.alphavantage.co/query";
pub const PROVIDER_ID: &str = "ALPHA_VANTAGE";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const INTRADAY_INTERVAL: &str = "60min";

/// Connection settings for [`AlphaVantageClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaVantageConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AlphaVantageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Notice fields Alpha Vantage puts in a JSON body instead of data.
#[derive(Debug, Default, Deserialize)]
struct ApiNotice {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

impl ApiNotice {
    /// The failure this notice reports, `None` for purely informational text.
    fn to_error(&self) -> Option<MarketDataError> {
        if let Some(message) = &self.error_message {
            return Some(error_message_to_error(message));
        }

        for notice in self.note.iter().chain(self.information.iter()) {
            if notice.contains("API call frequency") || notice.contains("rate limit") {
                return Some(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage notice: {}", notice);
        }
        None
    }
}

/// Maps an `Error Message` payload: unknown symbols and malformed calls
/// read "Invalid API call", everything else is a provider error.
fn error_message_to_error(message: &str) -> MarketDataError {
    if message.contains("Invalid API call") || message.contains("not found") {
        MarketDataError::SymbolNotFound(message.to_string())
    } else {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: message.to_string(),
        }
    }
}

/// Alpha Vantage HTTP client.
pub struct AlphaVantageClient {
    client: Client,
    config: AlphaVantageConfig,
}

impl AlphaVantageClient {
    /// Create a client against the public endpoint with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(AlphaVantageConfig::new(api_key))
    }

    pub fn with_config(config: AlphaVantageConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    pub fn config(&self) -> &AlphaVantageConfig {
        &self.config
    }

    fn build_url(&self, params: &[(&str, &str)]) -> Result<Url, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.config.api_key));

        Url::parse_with_params(&self.config.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })
    }

    fn masked(&self, url: &Url) -> String {
        if self.config.api_key.is_empty() {
            return url.to_string();
        }
        url.as_str().replace(&self.config.api_key, "***")
    }

    /// Make a request to the Alpha Vantage API and return the raw body.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Vec<u8>, MarketDataError> {
        let url = self.build_url(params)?;

        debug!("Alpha Vantage request: {}", self.masked(&url));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::Http {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Fetch an endpoint that is expected to answer with CSV.
    ///
    /// Alpha Vantage reports errors on CSV endpoints with a JSON body, which
    /// is turned into an error here rather than handed to a CSV parser.
    async fn fetch_csv(&self, params: &[(&str, &str)]) -> Result<Vec<u8>, MarketDataError> {
        let body = self.fetch(params).await?;
        if !looks_like_json(&body) {
            return Ok(body);
        }

        let notice: ApiNotice = serde_json::from_slice(&body).unwrap_or_default();
        if let Some(err) = notice.to_error() {
            return Err(err);
        }

        let message = notice
            .note
            .or(notice.information)
            .unwrap_or_else(|| "Unexpected JSON response to CSV request".to_string());
        Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message,
        })
    }
}

fn looks_like_json(body: &[u8]) -> bool {
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{')
}

#[async_trait]
impl StockDataProvider for AlphaVantageClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_listings_csv(&self) -> Result<Vec<u8>, MarketDataError> {
        let body = self.fetch_csv(&[("function", "LISTING_STATUS")]).await?;
        debug!("Alpha Vantage: fetched {} bytes of listings", body.len());
        Ok(body)
    }

    async fn get_intraday_csv(&self, symbol: &str) -> Result<Vec<u8>, MarketDataError> {
        let params = [
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", INTRADAY_INTERVAL),
            ("datatype", "csv"),
        ];
        let body = self.fetch_csv(&params).await?;
        debug!("Alpha Vantage: fetched intraday bars for {}", symbol);
        Ok(body)
    }

    async fn get_company_overview(
        &self,
        symbol: &str,
    ) -> Result<CompanyOverview, MarketDataError> {
        let params = [
            ("function", "OVERVIEW"),
            ("symbol", symbol),
            ("datatype", "json"),
        ];
        let body = self.fetch(&params).await?;

        let response: CompanyOverview =
            serde_json::from_slice(&body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse company overview response: {}", e),
            })?;

        // Throttling notices are returned as-is; the caller sees the missing name.
        if let Some(message) = &response.error_message {
            return Err(error_message_to_error(message));
        }
        if response.is_throttled() {
            warn!("Alpha Vantage throttled company overview for {}", symbol);
        } else {
            debug!("Alpha Vantage: fetched company overview for {}", symbol);
        }

        Ok(response)
    }
}
