//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/cafe` handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::CafeConfig;
use crate::directory::CityDirectory;
use crate::http::handler::cafe_handler;
use crate::http::request_id::{request_id, UuidRequestId};
use crate::lifecycle::shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CityDirectory>,
}

/// HTTP server for the café directory.
pub struct CafeServer {
    router: Router,
}

impl CafeServer {
    pub fn new(config: &CafeConfig, directory: Arc<CityDirectory>) -> Self {
        let state = AppState { directory };
        let router = Self::build_router(Duration::from_secs(config.timeouts.request_secs), state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost-last: the ID is set before the trace span opens,
    /// and copied to the response after the handler and timeout.
    #[allow(deprecated)]
    fn build_router(request_timeout: Duration, state: AppState) -> Router {
        Router::new()
            .route("/cafe", get(cafe_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The configured router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on the given listener until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
