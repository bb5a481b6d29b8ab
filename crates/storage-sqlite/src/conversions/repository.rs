use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use forex_core::conversions::{
    Conversion, ConversionRepositoryTrait, Page, PageRequest, SortOrder,
};
use forex_core::Result;

use super::model::ConversionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::conversions;

/// Append-only ledger of conversion records backed by SQLite.
///
/// Reads go straight to the pool; the single write goes through the writer
/// actor so it commits atomically or not at all. No update or delete path
/// exists for conversions.
#[derive(Clone)]
pub struct ConversionRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ConversionRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load_page(
        &self,
        query: conversions::BoxedQuery<'_, Sqlite>,
        total_elements: i64,
        page: &PageRequest,
    ) -> Result<Page<Conversion>> {
        let mut conn = get_connection(&self.pool)?;

        let ordered = match page.sort {
            SortOrder::Asc => query.order(conversions::timestamp.asc()),
            SortOrder::Desc => query.order(conversions::timestamp.desc()),
        };

        let rows = ordered
            .limit(page.page_size)
            .offset(page.offset())
            .load::<ConversionDB>(&mut conn)
            .map_err(StorageError::from)?;

        let content = rows
            .into_iter()
            .map(Conversion::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;

        Ok(Page::new(content, page, total_elements))
    }
}

#[async_trait]
impl ConversionRepositoryTrait for ConversionRepository {
    async fn append(&self, conversion: Conversion) -> Result<Conversion> {
        let row = ConversionDB::from(&conversion);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(conversions::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Conversion::try_from(row).map_err(Into::into)
            })
            .await
    }

    fn find_by_transaction_id(
        &self,
        transaction_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Conversion>> {
        let mut conn = get_connection(&self.pool)?;
        let total: i64 = conversions::table
            .filter(conversions::transaction_id.eq(transaction_id))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        drop(conn);

        let query = conversions::table
            .filter(conversions::transaction_id.eq(transaction_id.to_string()))
            .into_boxed();
        self.load_page(query, total, page)
    }

    fn find_by_timestamp_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: &PageRequest,
    ) -> Result<Page<Conversion>> {
        let mut conn = get_connection(&self.pool)?;
        let total: i64 = conversions::table
            .filter(conversions::timestamp.ge(start))
            .filter(conversions::timestamp.le(end))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        drop(conn);

        // Inclusive on both bounds.
        let query = conversions::table
            .filter(conversions::timestamp.ge(start))
            .filter(conversions::timestamp.le(end))
            .into_boxed();
        self.load_page(query, total, page)
    }
}
