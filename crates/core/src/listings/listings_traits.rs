use crate::errors::Result;
use crate::listings::listings_model::CompanyListing;
use async_trait::async_trait;

/// Local cache of company listings.
///
/// Reads are synchronous pool lookups; writes go through the store's writer.
#[async_trait]
pub trait ListingStoreTrait: Send + Sync {
    /// Listings whose name contains `query` (ignoring case) or whose symbol
    /// equals it upper-cased, in insertion order. A blank query returns all rows.
    fn search_listings(&self, query: &str) -> Result<Vec<CompanyListing>>;

    /// Discards every cached row and stores `listings` in their place, atomically.
    async fn replace_listings(&self, listings: Vec<CompanyListing>) -> Result<usize>;
}
