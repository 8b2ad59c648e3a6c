//! SQLite-backed repository implementation.
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with WAL mode and
//! foreign keys enabled; `sqlx::migrate!` applies
//! `migrations/001_initial_schema.sql` when [`Database::open`] is called.
//! [`SqliteQuoteRepository`] holds a pool clone and implements
//! [`crate::persistence::traits::QuoteRepository`].

mod database;
mod quote_repo;

pub use database::Database;
pub use quote_repo::SqliteQuoteRepository;
