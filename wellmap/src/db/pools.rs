//! Database pool abstraction supporting a read replica.
//!
//! This module provides [`DbPools`], a wrapper around SQLx connection pools that
//! routes queries to a read replica when one is configured.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   DbPools   │
//! └──────┬──────┘
//!        │
//!   ┌────┴────┐
//!   ↓         ↓
//! ┌───────┐  ┌─────────┐
//! │Primary│  │ Replica │ (optional)
//! └───────┘  └─────────┘
//! ```
//!
//! Every query this service issues is a read, so handlers go through [`DbPools::read`].
//! The primary is still the pool migrations run against.
//!
//! Each pool is bounded by `max_connections`. When every connection is checked out, further
//! acquisitions queue until one is returned (see [`PoolSettings::acquire_timeout`]). SQLx
//! returns a connection to its pool when the query future completes, whether it succeeded or not.

use crate::config::{DatabaseConfig, PoolSettings};
use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Database pool abstraction supporting a read replica.
///
/// Wraps primary and optional replica pools.
#[derive(Clone, Debug)]
pub struct DbPools {
    primary: PgPool,
    replica: Option<PgPool>,
}

impl DbPools {
    /// Create a new DbPools with only a primary pool.
    pub fn new(primary: PgPool) -> Self {
        Self { primary, replica: None }
    }

    /// Create a new DbPools with primary and replica pools.
    pub fn with_replica(primary: PgPool, replica: PgPool) -> Self {
        Self {
            primary,
            replica: Some(replica),
        }
    }

    /// Connect the pools described by `config`.
    ///
    /// The primary is connected eagerly so a bad URL or unreachable host fails at startup
    /// rather than on the first request.
    pub async fn connect(config: &DatabaseConfig, slow_statement_threshold: Duration) -> Result<Self, sqlx::Error> {
        let primary = pool_options(&config.pool)
            .connect_with(connect_options(&config.url, slow_statement_threshold)?)
            .await?;

        match &config.replica_url {
            Some(replica_url) => {
                info!("Routing reads to database replica");
                let replica = pool_options(&config.pool)
                    .connect_with(connect_options(replica_url, slow_statement_threshold)?)
                    .await?;
                Ok(Self::with_replica(primary, replica))
            }
            None => Ok(Self::new(primary)),
        }
    }

    /// Get a pool for read-only operations.
    ///
    /// Returns the replica pool if configured, otherwise falls back to primary.
    pub fn read(&self) -> &PgPool {
        self.replica.as_ref().unwrap_or(&self.primary)
    }

    /// Direct access to the primary pool.
    pub fn primary(&self) -> &PgPool {
        &self.primary
    }

    /// Close all database connections.
    ///
    /// Closes both primary and replica pools (if configured).
    pub async fn close(&self) {
        self.primary.close().await;
        if let Some(replica) = &self.replica {
            replica.close().await;
        }
    }
}

/// Translate [`PoolSettings`] into SQLx pool options.
pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
}

fn connect_options(url: &str, slow_statement_threshold: Duration) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(url)?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, slow_statement_threshold))
}
