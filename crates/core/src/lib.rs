//! Stock Market Core - Domain entities, repository, view-models and traits.
//!
//! This crate contains the business logic of the stock market app.
//! It is database-agnostic: the listing cache is reached through
//! [`listings::ListingStoreTrait`], implemented by the `storage-sqlite`
//! crate, and remote data through the market-data crate's
//! `StockDataProvider`.

pub mod company;
pub mod config;
pub mod constants;
pub mod csv_parser;
pub mod errors;
pub mod intraday;
pub mod listings;
pub mod presentation;
pub mod resource;
pub mod stocks;

pub use company::CompanyInfo;
pub use intraday::IntradayInfo;
pub use listings::CompanyListing;
pub use resource::Resource;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
