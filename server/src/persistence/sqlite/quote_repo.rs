//! SQLite-backed implementation of [`QuoteRepository`].

use sqlx::SqlitePool;

use crate::persistence::traits::QuoteRepository;
use crate::persistence::{now_timestamp, NewQuote, QuoteId, QuoteRecord, StoreError};

#[derive(Clone)]
pub struct SqliteQuoteRepository {
    pool: SqlitePool,
}

impl SqliteQuoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl QuoteRepository for SqliteQuoteRepository {
    async fn find_by_id(&self, id: QuoteId) -> Result<Option<QuoteRecord>, StoreError> {
        let row: Option<(i64, String, String, i64)> = sqlx::query_as(
            "SELECT quote_id, content, author, created_at \
             FROM quotes \
             WHERE quote_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(quote_id, content, author, created_at)| QuoteRecord {
            quote_id,
            content,
            author,
            created_at: created_at as u64,
        }))
    }

    async fn add(&self, quote: &NewQuote) -> Result<QuoteId, StoreError> {
        let created_at = now_timestamp() as i64;

        // Single INSERT, committed on return; the caller sees it as atomic.
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO quotes (content, author, created_at) \
             VALUES (?, ?, ?) \
             RETURNING quote_id",
        )
        .bind(&quote.content)
        .bind(&quote.author)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::sqlite::Database;

    fn make_quote(content: &str, author: &str) -> NewQuote {
        NewQuote {
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_find_roundtrip() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteQuoteRepository::new(db.pool().clone());

        let id = repo
            .add(&make_quote("Talk is cheap. Show me the code.", "Linus"))
            .await
            .unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.quote_id, id);
        assert_eq!(found.content, "Talk is cheap. Show me the code.");
        assert_eq!(found.author, "Linus");
        assert!(found.created_at > 0);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteQuoteRepository::new(db.pool().clone());

        let found = repo.find_by_id(99).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_assigned_ids_are_distinct_and_increasing() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteQuoteRepository::new(db.pool().clone());

        let first = repo.add(&make_quote("First quote", "Someone")).await.unwrap();
        let second = repo.add(&make_quote("Second quote", "Someone")).await.unwrap();

        assert!(second > first);
    }
}
