//! Wire-level models returned by stock data providers.

mod overview;

pub use overview::CompanyOverview;
