//! Create a quote.

use async_trait::async_trait;
use mediator::{Handler, Request, RequestContext};

use crate::persistence::{NewQuote, QuoteId, QuoteRepository};

/// Envelope: create a new quote from free-form content and an author name.
#[derive(Debug, Clone)]
pub struct CreateQuote {
    pub content: String,
    pub author: String,
}

impl Request for CreateQuote {
    type Outcome = CreateQuoteOutcome;
}

/// Everything creating a quote can come back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateQuoteOutcome {
    /// Persisted under the store-assigned identifier.
    Created { id: QuoteId },
    /// A business rule rejected the input; the message is human-readable.
    ValidationFailed { message: String },
}

const MIN_FIELD_CHARS: usize = 6;

const MSG_REQUIRED: &str = "Author and Content are both required.";
const MSG_TOO_SHORT: &str = "Author and Content must be at least six characters long.";

pub struct CreateQuoteHandler<S> {
    store: S,
}

impl<S> CreateQuoteHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: QuoteRepository + 'static> Handler<CreateQuote> for CreateQuoteHandler<S> {
    async fn handle(
        &self,
        request: CreateQuote,
        ctx: &RequestContext,
    ) -> anyhow::Result<CreateQuoteOutcome> {
        if request.content.trim().is_empty() || request.author.trim().is_empty() {
            return Ok(CreateQuoteOutcome::ValidationFailed {
                message: MSG_REQUIRED.to_string(),
            });
        }

        // The threshold only rejects when both fields fall short; a short
        // author name with substantial content is accepted.
        if request.content.chars().count() < MIN_FIELD_CHARS
            && request.author.chars().count() < MIN_FIELD_CHARS
        {
            return Ok(CreateQuoteOutcome::ValidationFailed {
                message: MSG_TOO_SHORT.to_string(),
            });
        }

        ctx.ensure_active()?;
        let id = self
            .store
            .add(&NewQuote {
                content: request.content,
                author: request.author,
            })
            .await?;

        Ok(CreateQuoteOutcome::Created { id })
    }
}
