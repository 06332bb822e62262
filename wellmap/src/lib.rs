//! # wellmap: read-only well data API
//!
//! `wellmap` serves oil and gas well records and their stimulation history from a PostgreSQL
//! store to a mapping frontend. It answers three questions: is the service up, which wells can
//! be drawn on the map, and what is everything known about one well.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! reads PostgreSQL through SQLx. A single pool set ([`db::pools::DbPools`]) is built at startup and
//! handed to every handler through [`AppState`]; there is no ambient global connection state.
//!
//! ### Request Flow
//!
//! A request reaches one of the handlers in [`api::handlers`]. The handler validates its path
//! parameter, runs one or two parameterized queries through the repositories in
//! [`db::handlers`], and maps rows into the payloads in [`api::models`]. Each query checks a
//! connection out of the pool and returns it when the statement finishes. Failures become
//! [`errors::Error`], which renders as `{"error": "..."}` with a 404 or 500 status.
//!
//! | Method & Path | Response |
//! |---|---|
//! | `GET /api/health` | `{"ok": true, "message": "API is running"}` |
//! | `GET /api/wells` | mappable wells: `well_id`, `api_number`, `name`, `latitude`, `longitude` |
//! | `GET /api/wells/{id}` | `{"well": {..}, "stimulations": [..]}` |
//!
//! The service never writes. The `wells` and `stimulations` tables are populated by separate
//! ingestion tooling.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use wellmap::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = wellmap::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     wellmap::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::db::pools::DbPools;
use crate::openapi::ApiDoc;
use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{StimulationId, WellId};

/// Application state shared across all request handlers.
///
/// - `db`: connection pools for the well store
/// - `config`: application configuration loaded from environment/files
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .db(pools)
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: DbPools,
    pub config: Config,
}

/// Get the reference schema migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origins = &config.cors.allowed_origins;

    let allow_origin = if origins.iter().any(|origin| matches!(origin, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut values = Vec::with_capacity(origins.len());
        for origin in origins {
            if let CorsOrigin::Url(url) = origin {
                // Origins never carry a path; Url always renders one
                values.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(values)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the main application router with all endpoints and middleware.
///
/// - `/api/health`, `/api/wells`, `/api/wells/{id}`
/// - `/api/openapi.json` and the Scalar UI at `/api/docs` when docs are enabled
/// - `/internal/metrics` when metrics are enabled
/// - CORS and request tracing on everything
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/health", get(api::handlers::health::health))
        .route("/wells", get(api::handlers::wells::list_wells))
        .route("/wells/{id}", get(api::handlers::wells::get_well))
        .with_state(state.clone());

    let mut router = Router::new().nest("/api", api_routes);

    if state.config.docs.enabled {
        router = router
            .route("/api/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
            .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));
    }

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router.layer(create_cors_layer(&state.config)?).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application: configuration, pools and router.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] connects the pools (and applies the reference schema when
///    `database.run_migrations` is set), then builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and handles requests until the
///    shutdown future resolves
/// 3. **Shutdown**: pools are closed and pending spans flushed
pub struct Application {
    router: Router,
    config: Config,
    pools: DbPools,
}

impl Application {
    /// Create a new application instance, connecting to the configured database
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Create a new application instance, optionally reusing an existing pool as the primary
    pub async fn new_with_pool(config: Config, pool: Option<sqlx::PgPool>) -> anyhow::Result<Self> {
        debug!("Starting well data service with configuration: {:#?}", config);

        let pools = match pool {
            Some(pool) => DbPools::new(pool),
            None => {
                info!("Connecting to database");
                DbPools::connect(&config.database, Duration::from_millis(config.slow_statement_threshold_ms)).await?
            }
        };

        if config.database.run_migrations {
            info!("Applying reference schema");
            migrator().run(pools.primary()).await?;
        }

        let app_state = AppState::builder().db(pools.clone()).config(config.clone()).build();
        let router = build_router(&app_state)?;

        Ok(Self { router, config, pools })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Well data API listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pools.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
