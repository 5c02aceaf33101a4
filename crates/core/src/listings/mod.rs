//! Company listings - domain model, cache trait and CSV parser.

mod listings_csv;
mod listings_model;
mod listings_traits;

pub use listings_csv::CompanyListingsParser;
pub use listings_model::{matches_query, CompanyListing};
pub use listings_traits::ListingStoreTrait;
