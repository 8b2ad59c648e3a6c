//! In-process typed request dispatch.
//!
//! A [`Mediator`] routes a request value to exactly one registered
//! [`Handler`] based on the request's type. Handlers return a closed,
//! per-operation set of outcome variants (a plain `enum`), so every
//! consumer must match the full set and the compiler flags any variant
//! a boundary layer forgot to translate.
//!
//! Registration happens once at process startup through
//! [`MediatorBuilder`]; the built table is immutable and can be shared
//! across tasks behind an `Arc` without locking.

pub mod context;
pub mod dispatch;
pub mod handler;
pub mod request;

pub use context::{Cancelled, RequestContext};
pub use dispatch::{DispatchError, Mediator, MediatorBuilder, RegistryError};
pub use handler::Handler;
pub use request::Request;

pub use async_trait::async_trait;
