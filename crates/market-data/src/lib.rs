//! Stock Market Data Crate
//!
//! This crate fetches raw stock data from remote providers. It knows
//! nothing about caching or presentation; callers receive CSV bytes or
//! deserialised JSON documents and decide how to parse them.
//!
//! # Architecture
//!
//! ```text
//! +--------------------+
//! | StockDataProvider  |  (trait, injected into the core repository)
//! +--------------------+
//!           |
//!           v
//! +--------------------+
//! | AlphaVantageClient |  (reqwest, API key as query parameter)
//! +--------------------+
//!           |
//!           v
//!  LISTING_STATUS (CSV) / TIME_SERIES_INTRADAY (CSV) / OVERVIEW (JSON)
//! ```
//!
//! # Core Types
//!
//! - [`StockDataProvider`] - Provider abstraction
//! - [`AlphaVantageClient`] - Alpha Vantage implementation
//! - [`CompanyOverview`] - Company fundamentals document
//! - [`MarketDataError`] - Provider errors, classified by [`FailureKind`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{FailureKind, MarketDataError};
pub use models::CompanyOverview;
pub use provider::alpha_vantage::{AlphaVantageClient, AlphaVantageConfig};
pub use provider::StockDataProvider;
