//! Look up a quote by identifier.

use async_trait::async_trait;
use mediator::{Handler, Request, RequestContext};
use serde::Serialize;

use crate::persistence::{QuoteId, QuoteRepository};

/// Envelope: fetch a single quote by its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetQuoteById {
    pub id: QuoteId,
}

impl Request for GetQuoteById {
    type Outcome = GetQuoteOutcome;
}

/// Projection returned to callers; serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub quote_id: QuoteId,
    pub content: String,
    pub author: String,
}

/// Found and absent are distinct variants; the handler never collapses
/// absence into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetQuoteOutcome {
    Found(QuoteView),
    NotFound,
}

pub struct GetQuoteByIdHandler<S> {
    store: S,
}

impl<S> GetQuoteByIdHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: QuoteRepository + 'static> Handler<GetQuoteById> for GetQuoteByIdHandler<S> {
    async fn handle(
        &self,
        request: GetQuoteById,
        ctx: &RequestContext,
    ) -> anyhow::Result<GetQuoteOutcome> {
        ctx.ensure_active()?;
        let record = self.store.find_by_id(request.id).await?;

        Ok(match record {
            Some(r) => GetQuoteOutcome::Found(QuoteView {
                quote_id: r.quote_id,
                content: r.content,
                author: r.author,
            }),
            None => GetQuoteOutcome::NotFound,
        })
    }
}
