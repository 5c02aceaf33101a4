//! SQLite storage implementation for the company listings cache.

mod model;
mod repository;

pub use model::{CompanyListingDB, NewCompanyListingDB};
pub use repository::ListingRepository;
