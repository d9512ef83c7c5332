//! In-memory quote store.
//!
//! Backs the API with an ordered `Vec` behind an `RwLock`. The struct is
//! constructed once and injected through application state; nothing here is
//! process-global, so tests get isolated instances.

use std::sync::RwLock;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::quotes_constants::DEFAULT_RATING;
use super::quotes_model::{
    no_quotes_available, quote_not_found, NewQuote, Quote, QuoteFilter, QuoteUpdate,
};
use super::quotes_traits::QuoteRepositoryTrait;
use crate::errors::Result;

struct MemoryState {
    quotes: Vec<Quote>,
    next_id: i32,
}

/// Quote repository backed by process memory.
pub struct MemoryQuoteRepository {
    state: RwLock<MemoryState>,
}

impl MemoryQuoteRepository {
    pub fn new() -> Self {
        MemoryQuoteRepository {
            state: RwLock::new(MemoryState {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteRepositoryTrait for MemoryQuoteRepository {
    fn list(&self) -> Result<Vec<Quote>> {
        // Ids are assigned monotonically, so insertion order is id order.
        let state = self.state.read().unwrap();
        Ok(state.quotes.clone())
    }

    fn get(&self, quote_id: i32) -> Result<Quote> {
        let state = self.state.read().unwrap();
        state
            .quotes
            .iter()
            .find(|q| q.id == quote_id)
            .cloned()
            .ok_or_else(|| quote_not_found(quote_id))
    }

    fn count(&self) -> Result<i64> {
        let state = self.state.read().unwrap();
        Ok(state.quotes.len() as i64)
    }

    fn random(&self) -> Result<Quote> {
        let state = self.state.read().unwrap();
        state
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(no_quotes_available)
    }

    fn filter(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        let state = self.state.read().unwrap();
        Ok(state
            .quotes
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn create(&self, new_quote: NewQuote) -> Result<Quote> {
        let mut state = self.state.write().unwrap();
        let quote = Quote {
            id: state.next_id,
            author: new_quote.author,
            text: new_quote.text,
            rating: DEFAULT_RATING,
        };
        state.next_id += 1;
        state.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn update(&self, quote_id: i32, update: QuoteUpdate) -> Result<Quote> {
        let mut state = self.state.write().unwrap();
        let quote = state
            .quotes
            .iter_mut()
            .find(|q| q.id == quote_id)
            .ok_or_else(|| quote_not_found(quote_id))?;
        update.apply_to(quote);
        Ok(quote.clone())
    }

    async fn delete(&self, quote_id: i32) -> Result<()> {
        let mut state = self.state.write().unwrap();
        let position = state
            .quotes
            .iter()
            .position(|q| q.id == quote_id)
            .ok_or_else(|| quote_not_found(quote_id))?;
        state.quotes.remove(position);
        Ok(())
    }
}
