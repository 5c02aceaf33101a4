//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all provider calls
//! - [`FailureKind`]: The coarse classification surfaced to callers

use thiserror::Error;

/// Coarse classification of a provider failure.
///
/// None of the kinds are retried; they only decide how a failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response (connect, DNS, timeout, body read).
    Io,
    /// The provider answered with a non-success HTTP status.
    Http,
    /// Anything else: unexpected payloads, provider-reported errors.
    Unknown,
}

/// Errors that can occur while talking to a stock data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429 or a frequency note).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    Http {
        /// The provider that returned the status
        provider: String,
        /// Numeric HTTP status code
        status: u16,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockmarket_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::Http { provider: "ALPHA_VANTAGE".to_string(), status: 503 };
    /// assert_eq!(error.failure_kind(), FailureKind::Http);
    ///
    /// let error = MarketDataError::Timeout { provider: "ALPHA_VANTAGE".to_string() };
    /// assert_eq!(error.failure_kind(), FailureKind::Io);
    /// ```
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Network(_) => FailureKind::Io,
            Self::Http { .. } | Self::RateLimited { .. } => FailureKind::Http,
            Self::SymbolNotFound(_) | Self::ProviderError { .. } => FailureKind::Unknown,
        }
    }

    /// Whether the provider refused the call because of quota or call frequency.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_io() {
        let error = MarketDataError::Timeout {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Io);
    }

    #[test]
    fn test_failure_kind_http() {
        let error = MarketDataError::Http {
            provider: "ALPHA_VANTAGE".to_string(),
            status: 500,
        };
        assert_eq!(error.failure_kind(), FailureKind::Http);

        let error = MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Http);
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_failure_kind_unknown() {
        let error = MarketDataError::SymbolNotFound("NOPE".to_string());
        assert_eq!(error.failure_kind(), FailureKind::Unknown);

        let error = MarketDataError::ProviderError {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "bad payload".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Unknown);
        assert!(!error.is_rate_limited());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("AAPL".to_string());
        assert_eq!(error.to_string(), "Symbol not found: AAPL");

        let error = MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(error.to_string(), "Rate limited: ALPHA_VANTAGE");

        let error = MarketDataError::Http {
            provider: "ALPHA_VANTAGE".to_string(),
            status: 503,
        };
        assert_eq!(error.to_string(), "HTTP 503 from ALPHA_VANTAGE");

        let error = MarketDataError::ProviderError {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Provider error: ALPHA_VANTAGE - API key invalid"
        );
    }
}
