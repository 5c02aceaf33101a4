//! Stock repository - cache-first listings, intraday bars and company profiles.

mod stocks_service;
mod stocks_traits;


pub use stocks_service::StockRepository;
pub use stocks_traits::StockRepositoryTrait;
