//! Quote domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{DatabaseError, Error, Result, ValidationError};

/// Domain model representing a stored quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub rating: i32,
}

/// Input model for creating a new quote.
///
/// The store assigns the id and forces the rating; callers only ever provide
/// author and text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub text: String,
}

/// Partial update for a quote. Fields left as `None` retain their stored
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteUpdate {
    pub author: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl QuoteUpdate {
    /// True when the update carries no fields at all (a no-op).
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.text.is_none() && self.rating.is_none()
    }

    /// Applies the present fields to a quote in place.
    pub fn apply_to(&self, quote: &mut Quote) {
        if let Some(ref author) = self.author {
            quote.author = author.clone();
        }
        if let Some(ref text) = self.text {
            quote.text = text.clone();
        }
        if let Some(rating) = self.rating {
            quote.rating = rating;
        }
    }
}

/// Conjunctive exact-match filter over quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub author: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl QuoteFilter {
    /// Builds a filter from decoded query-string pairs.
    ///
    /// Only `author`, `text`, and `rating` are recognized; anything else is
    /// rejected. A repeated key keeps its last value.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = QuoteFilter::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "author" => filter.author = Some(value.as_ref().to_string()),
                "text" => filter.text = Some(value.as_ref().to_string()),
                "rating" => {
                    let rating = value.as_ref().parse::<i32>().map_err(|_| {
                        ValidationError::InvalidRatingValue(value.as_ref().to_string())
                    })?;
                    filter.rating = Some(rating);
                }
                unknown => {
                    return Err(ValidationError::UnknownFilterKey(unknown.to_string()).into());
                }
            }
        }
        Ok(filter)
    }

    /// True when no criteria were supplied (matches everything).
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.text.is_none() && self.rating.is_none()
    }

    /// True when the quote satisfies every supplied criterion.
    pub fn matches(&self, quote: &Quote) -> bool {
        self.author.as_ref().is_none_or(|a| *a == quote.author)
            && self.text.as_ref().is_none_or(|t| *t == quote.text)
            && self.rating.is_none_or(|r| r == quote.rating)
    }
}

/// Error for an operation targeting a quote id that does not exist.
pub fn quote_not_found(quote_id: i32) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Quote with id={} not found",
        quote_id
    )))
}

/// Error for random selection over an empty store.
pub fn no_quotes_available() -> Error {
    Error::Database(DatabaseError::NotFound("No quotes available".to_string()))
}
