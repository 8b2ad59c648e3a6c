//! Handler contract for a single envelope type.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::request::Request;

/// Asynchronous handler for one operation.
///
/// `Ok` carries every *expected* business result — success and anticipated
/// failure variants alike live in [`Request::Outcome`]. The `Err` channel is
/// reserved for unexpected failures (a store going away, cancellation
/// observed mid-flight); the dispatcher forwards those unchanged and only
/// the outermost transport layer converts them to a generic response.
///
/// Handlers receive their collaborators at construction time and are fully
/// built before registration; nothing is resolved per call.
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    async fn handle(&self, request: R, ctx: &RequestContext) -> anyhow::Result<R::Outcome>;
}
