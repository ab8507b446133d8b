//! HTTP hosting for the analysis handler.
//!
//! The router buffers each request body and hands the complete request to
//! [`handler::handle`]; method dispatch, CORS and error shaping all live
//! there. Routing only decides which paths reach it.

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::{any, get};
use axum::Router;
use http::Method;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AnalysisEnv;
use crate::error::AnalysisError;
use crate::handler;

/// Path the original web client posts to
pub const ANALYZE_PATH: &str = "/api/analyze_snps";

#[derive(Clone)]
struct AppState {
    env: AnalysisEnv,
    max_body_bytes: usize,
}

/// Build the router: `/` and [`ANALYZE_PATH`] accept any method, `/health` answers GET.
pub fn router(env: AnalysisEnv, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", any(analyze_snps))
        .route(ANALYZE_PATH, any(analyze_snps))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            env,
            max_body_bytes,
        })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, env: AnalysisEnv, max_body_bytes: usize) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        address = %listener.local_addr()?,
        api_configured = env.api_key_configured(),
        "snp-lens listening"
    );

    axum::serve(listener, router(env, max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn analyze_snps(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes.to_vec(),
        // Only POST reads the body; other methods keep their own status
        Err(e) if parts.method == Method::POST => {
            warn!(error = %e, "Failed to read request body");
            let message = AnalysisError::Body(e.to_string()).to_string();
            return handler::error_response(&message).map(Body::from);
        }
        Err(_) => Vec::new(),
    };

    let request = http::Request::from_parts(parts, bytes);
    handler::handle(&request, &state.env).map(Body::from)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
