use log::debug;
use std::sync::Arc;

use super::quotes_model::{NewQuote, Quote, QuoteFilter, QuoteUpdate};
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::errors::Result;

/// Service for managing quotes.
///
/// A thin layer over the repository; handlers depend on this trait object and
/// never see the backing store.
pub struct QuoteService {
    repository: Arc<dyn QuoteRepositoryTrait>,
}

impl QuoteService {
    /// Creates a new QuoteService instance.
    pub fn new(repository: Arc<dyn QuoteRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl QuoteServiceTrait for QuoteService {
    fn get_quotes(&self) -> Result<Vec<Quote>> {
        self.repository.list()
    }

    fn get_quote(&self, quote_id: i32) -> Result<Quote> {
        self.repository.get(quote_id)
    }

    fn count_quotes(&self) -> Result<i64> {
        self.repository.count()
    }

    fn random_quote(&self) -> Result<Quote> {
        self.repository.random()
    }

    fn filter_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        self.repository.filter(filter)
    }

    async fn create_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        debug!("Creating quote by {}", new_quote.author);
        self.repository.create(new_quote).await
    }

    async fn update_quote(&self, quote_id: i32, update: QuoteUpdate) -> Result<Quote> {
        debug!("Updating quote id={}", quote_id);
        self.repository.update(quote_id, update).await
    }

    async fn delete_quote(&self, quote_id: i32) -> Result<()> {
        debug!("Deleting quote id={}", quote_id);
        self.repository.delete(quote_id).await
    }
}
