//! Quotes module - domain models, validation, services, and traits.

mod memory_repository;
mod quotes_constants;
mod quotes_model;
mod quotes_payload;
mod quotes_service;
mod quotes_traits;

#[cfg(test)]
mod quotes_model_tests;

#[cfg(test)]
mod quotes_service_tests;

// Re-export the public interface
pub use memory_repository::MemoryQuoteRepository;
pub use quotes_constants::*;
pub use quotes_model::{
    no_quotes_available, quote_not_found, NewQuote, Quote, QuoteFilter, QuoteUpdate,
};
pub use quotes_payload::QuotePayload;
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
