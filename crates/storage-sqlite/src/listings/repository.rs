use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use stockmarket_core::listings::{CompanyListing, ListingStoreTrait};
use stockmarket_core::Result;

use super::model::{CompanyListingDB, NewCompanyListingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::company_listings;
use crate::utils::chunk_for_sqlite;

/// Escapes LIKE wildcards so user input matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct ListingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ListingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ListingRepository { pool, writer }
    }

    pub fn search_listings_impl(&self, query: &str) -> Result<Vec<CompanyListing>> {
        let mut conn = get_connection(&self.pool)?;
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let rows = company_listings::table
            .filter(
                company_listings::name_lower
                    .like(pattern)
                    .escape('\\')
                    .or(company_listings::symbol.eq(query.to_uppercase())),
            )
            .order(company_listings::id.asc())
            .select(CompanyListingDB::as_select())
            .load::<CompanyListingDB>(&mut conn)
            .into_core()?;

        debug!("Listing search '{}' matched {} rows", query, rows.len());
        Ok(rows.into_iter().map(CompanyListing::from).collect())
    }
}

#[async_trait]
impl ListingStoreTrait for ListingRepository {
    fn search_listings(&self, query: &str) -> Result<Vec<CompanyListing>> {
        self.search_listings_impl(query)
    }

    async fn replace_listings(&self, listings: Vec<CompanyListing>) -> Result<usize> {
        let rows: Vec<NewCompanyListingDB> = listings.into_iter().map(Into::into).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let removed = diesel::delete(company_listings::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let mut inserted = 0;
                for chunk in chunk_for_sqlite(&rows) {
                    inserted += diesel::insert_into(company_listings::table)
                        .values(chunk)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                debug!("Replaced {} cached listings with {}", removed, inserted);
                Ok(inserted)
            })
            .await
    }
}
