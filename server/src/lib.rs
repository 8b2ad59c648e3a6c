//! Quotable server: quote CRUD over a typed in-process dispatcher.
//!
//! Exposed as a library so integration tests can assemble the same app
//! the binary runs.

pub mod config;
pub mod persistence;
pub mod quotes;
pub mod service;
