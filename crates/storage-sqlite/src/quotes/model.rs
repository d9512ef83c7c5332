//! Database models for quotes.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use quoteshelf_core::quotes::{NewQuote, QuoteUpdate, DEFAULT_RATING};

/// Database model for a stored quote.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub rating: i32,
}

/// Database model for inserting a new quote. The id comes from the table's
/// autoincrement; the rating is always the domain default.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuoteDB {
    pub author: String,
    pub text: String,
    pub rating: i32,
}

/// Changeset for partial updates. The updatable columns are fixed here; a
/// request can never name a column directly. `None` fields are left
/// untouched by Diesel.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::quotes)]
pub struct QuoteChangesetDB {
    pub author: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

// Conversion to domain models
impl From<QuoteDB> for quoteshelf_core::quotes::Quote {
    fn from(db: QuoteDB) -> Self {
        Self {
            id: db.id,
            author: db.author,
            text: db.text,
            rating: db.rating,
        }
    }
}

impl From<NewQuote> for NewQuoteDB {
    fn from(domain: NewQuote) -> Self {
        Self {
            author: domain.author,
            text: domain.text,
            rating: DEFAULT_RATING,
        }
    }
}

impl From<QuoteUpdate> for QuoteChangesetDB {
    fn from(domain: QuoteUpdate) -> Self {
        Self {
            author: domain.author,
            text: domain.text,
            rating: domain.rating,
        }
    }
}
