//! Request payload validation for quote create/update operations.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{Result, ValidationError};
use crate::quotes::quotes_constants::{RATING_MAX, RATING_MIN};
use crate::quotes::quotes_model::{NewQuote, QuoteUpdate};

/// Decoded body of a create or update request.
///
/// Recognized fields land in the typed members; everything else is captured
/// by the flattened map and rejected by [`QuotePayload::validate`]. The
/// payload itself is a pure pass-through: validation never alters it.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotePayload {
    pub author: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    #[serde(flatten)]
    unknown: Map<String, Value>,
}

impl QuotePayload {
    /// Checks the payload shape.
    ///
    /// Any key outside `{author, text, rating}` fails the whole payload.
    /// When `check_rating_range` is set (update operations), a present
    /// rating must be within `[RATING_MIN, RATING_MAX]`; on create the
    /// rating key is allowed but ignored, so the range is not checked.
    ///
    /// An empty payload validates successfully (a no-op update).
    pub fn validate(&self, check_rating_range: bool) -> Result<()> {
        if !self.unknown.is_empty() {
            let mut keys: Vec<&str> = self.unknown.keys().map(String::as_str).collect();
            keys.sort_unstable();
            return Err(ValidationError::UnknownFields(keys.join(", ")).into());
        }

        if check_rating_range {
            if let Some(rating) = self.rating {
                if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                    return Err(ValidationError::InvalidRating.into());
                }
            }
        }

        Ok(())
    }

    /// Converts into create input, requiring author and text. A supplied
    /// rating is dropped here; the store forces the default.
    pub fn into_new_quote(self) -> Result<NewQuote> {
        let author = self
            .author
            .ok_or_else(|| ValidationError::MissingField("author".to_string()))?;
        let text = self
            .text
            .ok_or_else(|| ValidationError::MissingField("text".to_string()))?;
        Ok(NewQuote { author, text })
    }

    /// Converts into a partial update carrying exactly the supplied fields.
    pub fn into_update(self) -> QuoteUpdate {
        QuoteUpdate {
            author: self.author,
            text: self.text,
            rating: self.rating,
        }
    }
}
