//! HTTP request handlers.
//!
//! Each handler reads through a repository from [`crate::db::handlers`] against the read pool
//! and returns [`crate::errors::Error`] on failure, which renders as `{"error": ...}` with the
//! matching status code.
//!
//! - [`health`]: liveness probe
//! - [`wells`]: well list and well detail

pub mod health;
pub mod wells;
