//! Tests for quote payload validation and filter parsing.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::quotes::{Quote, QuoteFilter, QuotePayload, QuoteUpdate};

    fn payload(json: &str) -> QuotePayload {
        serde_json::from_str(json).unwrap()
    }

    fn assert_validation(err: Error, expected: &str) {
        match err {
            Error::Validation(v) => assert_eq!(v.to_string(), expected),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // ==================== Payload Validation Tests ====================

    #[test]
    fn test_validate_accepts_known_fields() {
        let p = payload(r#"{"author":"Twain","text":"Quote.","rating":3}"#);
        assert!(p.validate(false).is_ok());
        assert!(p.validate(true).is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_payload() {
        let p = payload("{}");
        assert!(p.validate(true).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_field() {
        let p = payload(r#"{"author":"Twain","year":1890}"#);
        let err = p.validate(false).unwrap_err();
        assert_validation(err, "Invalid fields: year");
    }

    #[test]
    fn test_validate_rejects_unknown_field_regardless_of_rating_flag() {
        let p = payload(r#"{"rating":9,"year":1890}"#);
        // Unknown keys take precedence whether or not ratings are checked
        let err = p.clone().validate(true).unwrap_err();
        assert_validation(err, "Invalid fields: year");
        let err = p.validate(false).unwrap_err();
        assert_validation(err, "Invalid fields: year");
    }

    #[test]
    fn test_validate_lists_unknown_fields_sorted() {
        let p = payload(r#"{"zzz":1,"aaa":2}"#);
        let err = p.validate(false).unwrap_err();
        assert_validation(err, "Invalid fields: aaa, zzz");
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating_on_update() {
        for rating in [0, 6, -1, 9] {
            let p = payload(&format!(r#"{{"rating":{rating}}}"#));
            let err = p.validate(true).unwrap_err();
            assert_validation(err, "Rating must be between 1 and 5");
        }
    }

    #[test]
    fn test_validate_allows_any_rating_on_create() {
        // Create ignores the rating entirely, so the range is not checked
        let p = payload(r#"{"author":"A","text":"T","rating":9}"#);
        assert!(p.validate(false).is_ok());
    }

    #[test]
    fn test_validate_accepts_boundary_ratings_on_update() {
        for rating in 1..=5 {
            let p = payload(&format!(r#"{{"rating":{rating}}}"#));
            assert!(p.validate(true).is_ok());
        }
    }

    // ==================== Payload Conversion Tests ====================

    #[test]
    fn test_into_new_quote_drops_rating() {
        let p = payload(r#"{"author":"Twain","text":"Quote.","rating":5}"#);
        let new_quote = p.into_new_quote().unwrap();
        assert_eq!(new_quote.author, "Twain");
        assert_eq!(new_quote.text, "Quote.");
    }

    #[test]
    fn test_into_new_quote_requires_author_and_text() {
        let err = payload(r#"{"text":"T"}"#).into_new_quote().unwrap_err();
        assert_validation(err, "Required field 'author' is missing");

        let err = payload(r#"{"author":"A"}"#).into_new_quote().unwrap_err();
        assert_validation(err, "Required field 'text' is missing");
    }

    #[test]
    fn test_into_update_carries_only_supplied_fields() {
        let update = payload(r#"{"text":"new"}"#).into_update();
        assert_eq!(
            update,
            QuoteUpdate {
                author: None,
                text: Some("new".to_string()),
                rating: None,
            }
        );
        assert!(!update.is_empty());
        assert!(payload("{}").into_update().is_empty());
    }

    #[test]
    fn test_update_apply_preserves_unspecified_fields() {
        let mut quote = Quote {
            id: 1,
            author: "Twain".to_string(),
            text: "Old.".to_string(),
            rating: 4,
        };
        let update = QuoteUpdate {
            text: Some("New.".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut quote);
        assert_eq!(quote.author, "Twain");
        assert_eq!(quote.text, "New.");
        assert_eq!(quote.rating, 4);
    }

    // ==================== Filter Parsing Tests ====================

    #[test]
    fn test_filter_from_query_pairs() {
        let filter = QuoteFilter::from_query_pairs([("author", "Twain"), ("rating", "4")]).unwrap();
        assert_eq!(filter.author.as_deref(), Some("Twain"));
        assert_eq!(filter.text, None);
        assert_eq!(filter.rating, Some(4));
    }

    #[test]
    fn test_filter_rejects_unknown_key() {
        let err = QuoteFilter::from_query_pairs([("id", "3")]).unwrap_err();
        assert_validation(err, "Unknown filter key: id");
    }

    #[test]
    fn test_filter_rejects_non_integer_rating() {
        let err = QuoteFilter::from_query_pairs([("rating", "four")]).unwrap_err();
        assert_validation(err, "Rating must be an integer, got 'four'");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = QuoteFilter::from_query_pairs(std::iter::empty::<(&str, &str)>()).unwrap();
        assert!(filter.is_empty());
        let quote = Quote {
            id: 7,
            author: "A".to_string(),
            text: "T".to_string(),
            rating: 2,
        };
        assert!(filter.matches(&quote));
    }

    #[test]
    fn test_filter_matches_conjunctively() {
        let quote = Quote {
            id: 1,
            author: "Twain".to_string(),
            text: "Quote.".to_string(),
            rating: 4,
        };
        let matching =
            QuoteFilter::from_query_pairs([("author", "Twain"), ("rating", "4")]).unwrap();
        assert!(matching.matches(&quote));

        let mismatched =
            QuoteFilter::from_query_pairs([("author", "Twain"), ("rating", "5")]).unwrap();
        assert!(!mismatched.matches(&quote));
    }

    // ==================== Validation Error Precedence ====================

    #[test]
    fn test_missing_body_values_deserialize_as_none() {
        let p = payload(r#"{"author":null}"#);
        assert!(p.validate(true).is_ok());
        assert!(p.into_update().is_empty());
    }
}
