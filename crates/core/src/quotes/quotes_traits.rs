use crate::errors::Result;
use crate::quotes::quotes_model::{NewQuote, Quote, QuoteFilter, QuoteUpdate};
use async_trait::async_trait;

/// Trait for quote repository operations.
///
/// Reads are synchronous; mutating operations are async because the SQLite
/// backend routes them through the writer actor.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// All quotes, ordered by id ascending.
    fn list(&self) -> Result<Vec<Quote>>;
    /// A single quote, or `DatabaseError::NotFound`.
    fn get(&self, quote_id: i32) -> Result<Quote>;
    /// Number of quotes currently stored.
    fn count(&self) -> Result<i64>;
    /// One quote chosen uniformly at random; `NotFound` when empty.
    fn random(&self) -> Result<Quote>;
    /// Quotes matching every supplied criterion, ordered by id ascending.
    fn filter(&self, filter: &QuoteFilter) -> Result<Vec<Quote>>;
    /// Persists a new quote with a fresh id and the default rating, and
    /// returns the stored record.
    async fn create(&self, new_quote: NewQuote) -> Result<Quote>;
    /// Replaces only the fields present in `update` and returns the full
    /// updated record. Performs no mutation when the id is absent.
    async fn update(&self, quote_id: i32, update: QuoteUpdate) -> Result<Quote>;
    /// Removes the record, or reports `NotFound`.
    async fn delete(&self, quote_id: i32) -> Result<()>;
}

/// Trait for quote service operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    fn get_quotes(&self) -> Result<Vec<Quote>>;
    fn get_quote(&self, quote_id: i32) -> Result<Quote>;
    fn count_quotes(&self) -> Result<i64>;
    fn random_quote(&self) -> Result<Quote>;
    fn filter_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>>;
    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    async fn update_quote(&self, quote_id: i32, update: QuoteUpdate) -> Result<Quote>;
    async fn delete_quote(&self, quote_id: i32) -> Result<()>;
}
