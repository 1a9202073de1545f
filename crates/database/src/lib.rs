//! # Opiniao Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! SQLite base that stores customer opinions. It is the only part of the
//! system that speaks SQL.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** The crate encapsulates all database-specific logic and
//!   exposes a small, typed API to the web layer, hiding the underlying SQL
//!   and schema details.
//! - **Asynchronous & Pooled:** All operations are asynchronous and run over
//!   a connection pool, so every request borrows a connection for exactly the
//!   duration of one statement and returns it on every exit path.
//!
//! ## Public API
//!
//! - `connect` / `connect_with`: establish the connection pool.
//! - `run_migrations`: apply the embedded schema migrations at startup.
//! - `OpiniaoRepository`: the data-access methods, one per store operation.
//! - `DbError`: the specific error types that can be returned from this crate.

pub mod connection;
pub mod error;
pub mod repository;

pub use connection::{connect, connect_with, run_migrations};
pub use error::DbError;
pub use repository::{NewOpiniao, Opiniao, OpiniaoRepository};
