//! Database models for company listings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use stockmarket_core::listings::CompanyListing;

/// Database model for a cached listing row
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::company_listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CompanyListingDB {
    pub id: i32,
    pub name: String,
    pub name_lower: String,
    pub symbol: String,
    pub exchange: String,
}

/// Database model for inserting a listing; the id is assigned by SQLite.
///
/// `name_lower` is folded with Rust's Unicode rules so searches agree with
/// [`stockmarket_core::listings::matches_query`].
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::company_listings)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyListingDB {
    pub name: String,
    pub name_lower: String,
    pub symbol: String,
    pub exchange: String,
}

impl From<CompanyListingDB> for CompanyListing {
    fn from(db: CompanyListingDB) -> Self {
        Self {
            name: db.name,
            symbol: db.symbol,
            exchange: db.exchange,
        }
    }
}

impl From<CompanyListing> for NewCompanyListingDB {
    fn from(domain: CompanyListing) -> Self {
        Self {
            name_lower: domain.name.to_lowercase(),
            name: domain.name,
            symbol: domain.symbol,
            exchange: domain.exchange,
        }
    }
}
