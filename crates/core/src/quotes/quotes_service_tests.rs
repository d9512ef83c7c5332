//! Contract tests for the quote service over the in-memory repository.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::errors::{DatabaseError, Error};
    use crate::quotes::{
        MemoryQuoteRepository, NewQuote, QuoteFilter, QuoteService, QuoteServiceTrait, QuoteUpdate,
    };

    fn service() -> QuoteService {
        QuoteService::new(Arc::new(MemoryQuoteRepository::new()))
    }

    fn new_quote(author: &str, text: &str) -> NewQuote {
        NewQuote {
            author: author.to_string(),
            text: text.to_string(),
        }
    }

    fn assert_not_found(err: Error, expected: &str) {
        match err {
            Error::Database(DatabaseError::NotFound(msg)) => assert_eq!(msg, expected),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids_and_default_rating() {
        let service = service();
        let first = service.create_quote(new_quote("A", "T1")).await.unwrap();
        let second = service.create_quote(new_quote("B", "T2")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.rating, 1);
        assert_eq!(second.rating, 1);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = service();
        let created = service
            .create_quote(new_quote("Twain", "Quote."))
            .await
            .unwrap();

        let fetched = service.get_quote(created.id).unwrap();
        assert_eq!(fetched.author, "Twain");
        assert_eq!(fetched.text, "Quote.");
        assert_eq!(fetched.rating, 1);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let service = service();
        for i in 0..3 {
            service
                .create_quote(new_quote("A", &format!("T{i}")))
                .await
                .unwrap();
        }
        let quotes = service.get_quotes().unwrap();
        let ids: Vec<i32> = quotes.iter().map(|q| q.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_count_tracks_creates_and_deletes() {
        let service = service();
        assert_eq!(service.count_quotes().unwrap(), 0);

        let quote = service.create_quote(new_quote("A", "T")).await.unwrap();
        assert_eq!(service.count_quotes().unwrap(), 1);

        service.delete_quote(quote.id).await.unwrap();
        assert_eq!(service.count_quotes().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_preserves_unspecified_fields() {
        let service = service();
        let quote = service
            .create_quote(new_quote("Twain", "Old text."))
            .await
            .unwrap();

        let updated = service
            .update_quote(
                quote.id,
                QuoteUpdate {
                    text: Some("New text.".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.author, "Twain");
        assert_eq!(updated.text, "New text.");
        assert_eq!(updated.rating, 1);
    }

    #[tokio::test]
    async fn test_update_returns_the_stored_record() {
        let service = service();
        let quote = service.create_quote(new_quote("A", "T")).await.unwrap();

        let updated = service
            .update_quote(
                quote.id,
                QuoteUpdate {
                    rating: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.rating, 4);

        // Re-read confirms the mutation reached the store
        assert_eq!(service.get_quote(quote.id).unwrap().rating, 4);
    }

    #[tokio::test]
    async fn test_empty_update_is_a_no_op() {
        let service = service();
        let quote = service.create_quote(new_quote("A", "T")).await.unwrap();
        let updated = service
            .update_quote(quote.id, QuoteUpdate::default())
            .await
            .unwrap();
        assert_eq!(updated, quote);
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_not_found() {
        let service = service();
        let err = service
            .update_quote(42, QuoteUpdate::default())
            .await
            .unwrap_err();
        assert_not_found(err, "Quote with id=42 not found");
    }

    #[tokio::test]
    async fn test_delete_then_get_reports_not_found() {
        let service = service();
        let quote = service.create_quote(new_quote("A", "T")).await.unwrap();

        service.delete_quote(quote.id).await.unwrap();
        let err = service.get_quote(quote.id).unwrap_err();
        assert_not_found(err, &format!("Quote with id={} not found", quote.id));
    }

    #[tokio::test]
    async fn test_delete_missing_id_reports_not_found() {
        let service = service();
        let err = service.delete_quote(999999).await.unwrap_err();
        assert_not_found(err, "Quote with id=999999 not found");
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reassigned() {
        let service = service();
        let first = service.create_quote(new_quote("A", "T1")).await.unwrap();
        service.delete_quote(first.id).await.unwrap();

        let second = service.create_quote(new_quote("B", "T2")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_random_returns_a_stored_quote() {
        let service = service();
        for i in 0..5 {
            service
                .create_quote(new_quote("A", &format!("T{i}")))
                .await
                .unwrap();
        }
        let quote = service.random_quote().unwrap();
        assert!(service.get_quotes().unwrap().contains(&quote));
    }

    #[tokio::test]
    async fn test_random_on_empty_store_reports_not_found() {
        let service = service();
        let err = service.random_quote().unwrap_err();
        assert_not_found(err, "No quotes available");
    }

    #[tokio::test]
    async fn test_filter_matches_exactly() {
        let service = service();
        let a = service.create_quote(new_quote("Twain", "T1")).await.unwrap();
        let b = service.create_quote(new_quote("Twain", "T2")).await.unwrap();
        service.create_quote(new_quote("Wilde", "T3")).await.unwrap();

        service
            .update_quote(
                b.id,
                QuoteUpdate {
                    rating: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let by_author = service
            .filter_quotes(&QuoteFilter {
                author: Some("Twain".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_author.len(), 2);
        assert!(by_author.iter().all(|q| q.author == "Twain"));

        let by_rating = service
            .filter_quotes(&QuoteFilter {
                rating: Some(4),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_rating.len(), 1);
        assert_eq!(by_rating[0].id, b.id);

        let conjunctive = service
            .filter_quotes(&QuoteFilter {
                author: Some("Twain".to_string()),
                rating: Some(1),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(conjunctive.len(), 1);
        assert_eq!(conjunctive[0].id, a.id);
    }
}
