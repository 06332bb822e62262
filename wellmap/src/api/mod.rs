//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Response payloads
//!
//! # Routes
//!
//! | Method & Path | Handler |
//! |---|---|
//! | `GET /api/health` | [`handlers::health::health`] |
//! | `GET /api/wells` | [`handlers::wells::list_wells`] |
//! | `GET /api/wells/{id}` | [`handlers::wells::get_well`] |
//!
//! All routes are documented with `utoipa`; the document is served at `/api/openapi.json`.

pub mod handlers;
pub mod models;
