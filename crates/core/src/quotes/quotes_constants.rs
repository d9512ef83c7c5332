//! Constants for the quotes domain.

/// Lowest rating a quote can carry.
pub const RATING_MIN: i32 = 1;

/// Highest rating a quote can carry.
pub const RATING_MAX: i32 = 5;

/// Rating assigned to every newly created quote, regardless of input.
pub const DEFAULT_RATING: i32 = 1;

/// The only fields a client may supply in a create/update payload or a
/// filter query. Everything else is rejected before reaching the store.
pub const MUTABLE_FIELDS: [&str; 3] = ["author", "text", "rating"];
