//! Persistence layer for quotes.
//!
//! The domain talks to the store only through [`QuoteRepository`];
//! the SQLite implementation lives in [`sqlite`].

pub mod sqlite;
pub mod traits;

pub use sqlite::{Database, SqliteQuoteRepository};
pub use traits::QuoteRepository;

use std::time::{SystemTime, UNIX_EPOCH};

/// Store-assigned integer identifier for a quote.
pub type QuoteId = i64;

/// A quote row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub quote_id: QuoteId,
    pub content: String,
    pub author: String,
    pub created_at: u64,
}

/// A quote about to be inserted; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub content: String,
    pub author: String,
}

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(String),
}

/// Get the current unix timestamp in seconds.
pub(crate) fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
