//! Database layer for read access to the well store.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - parameterized read queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │  (wells, stimulations)
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations
//! - [`models`]: Database record structures
//! - [`errors`]: Database-specific error types
//! - [`pools`]: Pool construction and replica routing
//!
//! # Migrations
//!
//! The tables are created and filled by the ingestion tooling. `migrations/` holds the
//! reference schema, applied by `#[sqlx::test]` and, when `database.run_migrations` is set,
//! at startup through [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pools;
