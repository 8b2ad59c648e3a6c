//! Boundary adapters for the quote routes.
//!
//! Each route builds an envelope from transport input, dispatches it, and
//! translates the outcome set. The `respond_*` functions carry the full
//! matches with no wildcard arm, so a new outcome variant refuses to
//! compile until every route here translates it. Anything escaping the
//! dispatcher on the error channel becomes a bare 500; the detail goes to
//! the log, never to the caller.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mediator::DispatchError;
use serde::{Deserialize, Serialize};

use crate::persistence::QuoteId;
use crate::quotes::{CreateQuote, CreateQuoteOutcome, GetQuoteById, GetQuoteOutcome};
use crate::service::AppState;

/// Body of `POST /quotes`. Missing fields default to empty strings and
/// fall through to the handler's required-field rule.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBody {
    quote_id: QuoteId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationBody {
    error_message: String,
}

pub async fn get_quote(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    tracing::info!(id, "HTTP get_quote");

    let ctx = state.request_context();
    match state.mediator().dispatch(GetQuoteById { id }, &ctx).await {
        Ok(outcome) => respond_get(outcome),
        Err(err) => internal_error(err),
    }
}

pub async fn create_quote(
    State(state): State<AppState>,
    Json(body): Json<CreateQuoteBody>,
) -> Response {
    tracing::info!(author = %body.author, "HTTP create_quote");

    let ctx = state.request_context();
    let envelope = CreateQuote {
        content: body.content,
        author: body.author,
    };
    match state.mediator().dispatch(envelope, &ctx).await {
        Ok(outcome) => respond_create(outcome),
        Err(err) => internal_error(err),
    }
}

/// 200 with the projection, or 404 with an empty body. Absence is a
/// business outcome, not an error.
fn respond_get(outcome: GetQuoteOutcome) -> Response {
    match outcome {
        GetQuoteOutcome::Found(view) => (StatusCode::OK, Json(view)).into_response(),
        GetQuoteOutcome::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 201 with a `Location` pointing at the new resource, or 400 carrying
/// the validation message.
fn respond_create(outcome: CreateQuoteOutcome) -> Response {
    match outcome {
        CreateQuoteOutcome::Created { id } => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/quotes/{id}"))],
            Json(CreatedBody { quote_id: id }),
        )
            .into_response(),
        CreateQuoteOutcome::ValidationFailed { message } => (
            StatusCode::BAD_REQUEST,
            Json(ValidationBody {
                error_message: message,
            }),
        )
            .into_response(),
    }
}

/// Outermost conversion for failures the handlers did not anticipate.
fn internal_error(err: DispatchError) -> Response {
    tracing::error!(error = %err, "request failed unexpectedly");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
