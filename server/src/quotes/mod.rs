//! Quote operations: envelopes, outcome sets, and handlers.
//!
//! Each operation defines an envelope type, a closed outcome `enum`, and a
//! handler over an injected [`crate::persistence::QuoteRepository`].
//! Handlers place every anticipated result in the outcome set and never
//! decide transport status codes — that translation belongs to
//! [`crate::service`].

pub mod create;
pub mod get;

pub use create::{CreateQuote, CreateQuoteHandler, CreateQuoteOutcome};
pub use get::{GetQuoteById, GetQuoteByIdHandler, GetQuoteOutcome, QuoteView};
