//! Async repository trait definitions for the persistence layer.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send` — required by the boxed futures of the
//! dispatch layer's `#[async_trait]` handlers and by `tokio::spawn`.

use std::future::Future;

use super::{NewQuote, QuoteId, QuoteRecord, StoreError};

/// Record store for quotes, keyed by a store-assigned integer identifier.
pub trait QuoteRepository: Send + Sync {
    /// Look up a single quote. Absence is `Ok(None)`, never an error.
    fn find_by_id(
        &self,
        id: QuoteId,
    ) -> impl Future<Output = Result<Option<QuoteRecord>, StoreError>> + Send;

    /// Insert `quote` and commit in one step, returning the assigned
    /// identifier. Atomic from the caller's perspective.
    fn add(&self, quote: &NewQuote) -> impl Future<Output = Result<QuoteId, StoreError>> + Send;
}
