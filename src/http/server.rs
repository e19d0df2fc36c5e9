//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, limits, origin policy)
//! - Bind server to listener
//! - Graceful shutdown on signal or trigger

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::applications::handlers;
use crate::config::AppConfig;
use crate::db::ApplicationStore;
use crate::http::health;
use crate::http::request::{make_request_span, UuidRequestId};
use crate::lifecycle::wait_for_shutdown;
use crate::security::{enforce_origin, OriginPolicy};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ApplicationStore>,
    pub service_name: Arc<str>,
}

/// HTTP server for the driver applications API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: AppConfig, store: Arc<dyn ApplicationStore>) -> Self {
        let state = AppState {
            store,
            service_name: Arc::from(config.server.service_name.as_str()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let origin_policy = OriginPolicy::from_config(&config.cors);

        let router = Router::new()
            .route("/", get(health::status))
            .route(
                "/applications",
                get(handlers::list_applications).post(handlers::submit_application),
            )
            .with_state(state)
            .layer(origin_policy.cors_layer())
            .layer(middleware::from_fn_with_state(origin_policy, enforce_origin))
            // Enforced by the body extractor so oversized bodies still get a JSON reply.
            .layer(DefaultBodyLimit::max(config.security.max_body_size));

        let router = match config.timeouts.request_secs {
            Some(secs) => router.layer(TimeoutLayer::new(Duration::from_secs(secs))),
            None => router,
        };

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Serve on `listener` until an OS signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.config.server.service_name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
