//! The dispatcher: a process-wide envelope-type → handler table.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::handler::Handler;
use crate::request::Request;

/// Registration failures. Fatal: the process should refuse to start
/// rather than route requests over a bad table.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("a handler is already registered for request type `{request_type}`")]
    DuplicateHandler { request_type: &'static str },
}

/// Dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No entry for the envelope's type. Unreachable once startup
    /// registration has been validated; a programmer error, not a
    /// recoverable condition.
    #[error("no handler registered for request type `{request_type}`")]
    NoHandlerRegistered { request_type: &'static str },

    /// An unexpected failure escaping a handler, forwarded unchanged.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

struct Registration {
    handler: Box<dyn Any + Send + Sync>,
}

/// Builds the one-to-one mapping from envelope type to handler.
///
/// Consumed by [`MediatorBuilder::build`], so the finished table has no
/// remaining writer.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Registration>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the single handler for envelope type `R`.
    ///
    /// A second registration for the same envelope type fails instead of
    /// silently replacing the first.
    pub fn register<R, H>(mut self, handler: H) -> Result<Self, RegistryError>
    where
        R: Request,
        H: Handler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(RegistryError::DuplicateHandler {
                request_type: std::any::type_name::<R>(),
            });
        }
        let erased: Arc<dyn Handler<R>> = Arc::new(handler);
        self.handlers.insert(
            key,
            Registration {
                handler: Box::new(erased),
            },
        );
        Ok(self)
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: self.handlers,
        }
    }
}

/// Routes an envelope to its single registered handler by the envelope's
/// runtime type and returns the handler's outcome untouched.
///
/// The table is populated once at startup and read-only afterwards, so
/// concurrent dispatches share it without locking.
pub struct Mediator {
    handlers: HashMap<TypeId, Registration>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Dispatch `request` to its handler and await the outcome.
    ///
    /// The mediator performs no interpretation of the outcome's contents —
    /// telling success from failure variants is the boundary layer's job.
    /// Exactly one handler is invoked exactly once per call.
    pub async fn dispatch<R: Request>(
        &self,
        request: R,
        ctx: &RequestContext,
    ) -> Result<R::Outcome, DispatchError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.handler.downcast_ref::<Arc<dyn Handler<R>>>())
            .ok_or(DispatchError::NoHandlerRegistered {
                request_type: std::any::type_name::<R>(),
            })?;
        Ok(handler.handle(request, ctx).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;

    struct Ping;

    impl Request for Ping {
        type Outcome = PingOutcome;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum PingOutcome {
        Pong,
    }

    struct Echo(String);

    impl Request for Echo {
        type Outcome = String;
    }

    struct CountingPingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler<Ping> for CountingPingHandler {
        async fn handle(
            &self,
            _request: Ping,
            _ctx: &RequestContext,
        ) -> anyhow::Result<PingOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PingOutcome::Pong)
        }
    }

    struct CountingEchoHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler<Echo> for CountingEchoHandler {
        async fn handle(&self, request: Echo, _ctx: &RequestContext) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request.0)
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl Handler<Ping> for FailingHandler {
        async fn handle(
            &self,
            _request: Ping,
            _ctx: &RequestContext,
        ) -> anyhow::Result<PingOutcome> {
            Err(anyhow::anyhow!("store exploded"))
        }
    }

    #[tokio::test]
    async fn routes_each_envelope_type_to_its_own_handler() {
        let ping_calls = Arc::new(AtomicUsize::new(0));
        let echo_calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .register::<Ping, _>(CountingPingHandler {
                calls: ping_calls.clone(),
            })
            .unwrap()
            .register::<Echo, _>(CountingEchoHandler {
                calls: echo_calls.clone(),
            })
            .unwrap()
            .build();
        let ctx = RequestContext::default();

        let outcome = mediator.dispatch(Ping, &ctx).await.unwrap();
        assert_eq!(outcome, PingOutcome::Pong);
        assert_eq!(ping_calls.load(Ordering::SeqCst), 1);
        assert_eq!(echo_calls.load(Ordering::SeqCst), 0);

        let echoed = mediator.dispatch(Echo("hello".into()), &ctx).await.unwrap();
        assert_eq!(echoed, "hello");
        assert_eq!(ping_calls.load(Ordering::SeqCst), 1);
        assert_eq!(echo_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duplicate_registration_fails_instead_of_replacing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = Mediator::builder()
            .register::<Ping, _>(CountingPingHandler {
                calls: calls.clone(),
            })
            .unwrap()
            .register::<Ping, _>(CountingPingHandler { calls });
        match result {
            Err(RegistryError::DuplicateHandler { request_type }) => {
                assert!(request_type.contains("Ping"));
            }
            Ok(_) => panic!("second registration for the same envelope type must fail"),
        }
    }

    #[tokio::test]
    async fn dispatch_without_handler_reports_the_missing_type() {
        let mediator = Mediator::builder().build();
        let err = mediator
            .dispatch(Ping, &RequestContext::default())
            .await
            .unwrap_err();
        match err {
            DispatchError::NoHandlerRegistered { request_type } => {
                assert!(request_type.contains("Ping"));
            }
            DispatchError::Handler(other) => {
                panic!("expected NoHandlerRegistered, got {other:#}")
            }
        }
    }

    #[tokio::test]
    async fn handler_failures_propagate_unchanged() {
        let mediator = Mediator::builder()
            .register::<Ping, _>(FailingHandler)
            .unwrap()
            .build();
        let err = mediator
            .dispatch(Ping, &RequestContext::default())
            .await
            .unwrap_err();
        match err {
            DispatchError::Handler(inner) => assert_eq!(inner.to_string(), "store exploded"),
            DispatchError::NoHandlerRegistered { .. } => panic!("handler was registered"),
        }
    }
}
