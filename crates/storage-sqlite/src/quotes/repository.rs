use quoteshelf_core::quotes::{
    no_quotes_available, quote_not_found, NewQuote, Quote, QuoteFilter, QuoteRepositoryTrait,
    QuoteUpdate,
};
use quoteshelf_core::Result;

use super::model::{NewQuoteDB, QuoteChangesetDB, QuoteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use std::sync::Arc;

diesel::define_sql_function! {
    /// SQLite RANDOM(), used for uniform selection via ORDER BY.
    fn random() -> BigInt;
}

/// Quote repository backed by the SQLite `quotes` table.
///
/// Reads check a connection out of the pool; mutations run on the writer
/// actor's dedicated connection inside an immediate transaction.
pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn list(&self) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let quotes_db = quotes::table
            .order(quotes::id.asc())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(quotes_db.into_iter().map(Quote::from).collect())
    }

    fn get(&self, quote_id: i32) -> Result<Quote> {
        let mut conn = get_connection(&self.pool)?;
        quotes::table
            .find(quote_id)
            .first::<QuoteDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Quote::from)
            .ok_or_else(|| quote_not_found(quote_id))
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = quotes::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total)
    }

    fn random(&self) -> Result<Quote> {
        let mut conn = get_connection(&self.pool)?;
        quotes::table
            .order(random())
            .first::<QuoteDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Quote::from)
            .ok_or_else(no_quotes_available)
    }

    fn filter(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = quotes::table.into_boxed();
        if let Some(ref author) = filter.author {
            query = query.filter(quotes::author.eq(author.clone()));
        }
        if let Some(ref text) = filter.text {
            query = query.filter(quotes::text.eq(text.clone()));
        }
        if let Some(rating) = filter.rating {
            query = query.filter(quotes::rating.eq(rating));
        }
        let quotes_db = query
            .order(quotes::id.asc())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(quotes_db.into_iter().map(Quote::from).collect())
    }

    async fn create(&self, new_quote: NewQuote) -> Result<Quote> {
        self.writer
            .exec(move |conn| {
                let new_quote_db = NewQuoteDB::from(new_quote);
                let result_db = diesel::insert_into(quotes::table)
                    .values(&new_quote_db)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Quote::from(result_db))
            })
            .await
    }

    async fn update(&self, quote_id: i32, update: QuoteUpdate) -> Result<Quote> {
        self.writer
            .exec(move |conn| {
                if update.is_empty() {
                    // Nothing to change; just confirm existence and return
                    return quotes::table
                        .find(quote_id)
                        .first::<QuoteDB>(conn)
                        .optional()
                        .map_err(StorageError::from)?
                        .map(Quote::from)
                        .ok_or_else(|| quote_not_found(quote_id));
                }

                let changes = QuoteChangesetDB::from(update);
                let affected = diesel::update(quotes::table.find(quote_id))
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(quote_not_found(quote_id));
                }

                // Re-read so unspecified fields come back with stored values
                let result_db = quotes::table
                    .find(quote_id)
                    .first::<QuoteDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Quote::from(result_db))
            })
            .await
    }

    async fn delete(&self, quote_id: i32) -> Result<()> {
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(quotes::table.find(quote_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(quote_not_found(quote_id));
                }
                Ok(())
            })
            .await
    }
}
