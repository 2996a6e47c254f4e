//! HTTP service exposing the generator registry
//!
//! - `GET /health` - liveness probe
//! - `GET /generators` - registered generators, sorted by name
//! - `POST /generate` - run a generator on `{template, input}`

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use structgen_core::{GenerateError, Registry};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "structgen-api";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub template: String,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ListGeneratorsResponse {
    pub generators: Vec<GeneratorInfo>,
}

/// Failure of a `/generate` call, rendered as `{"error": ...}`
#[derive(Debug)]
pub enum ApiError {
    Generate(GenerateError),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Generate(GenerateError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Generate(GenerateError::Parse(_))
            | ApiError::Generate(GenerateError::UnsupportedRootKind { .. })
            | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Generate(GenerateError::Execution(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        ApiError::Generate(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request format: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Generate(err) => err.to_string(),
            ApiError::BadRequest(message) | ApiError::Internal(message) => message.clone(),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "generation failed");
        } else {
            tracing::debug!(%status, error = %message, "generation rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Create the router serving `registry`.
pub fn create_router(registry: Arc<Registry>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/generators", get(list_generators_handler))
        .route("/generate", post(generate_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(registry)
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(registry: Arc<Registry>, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    tracing::info!(address = %listener.local_addr()?, generators = registry.len(), "server listening");
    eprintln!("structgen server listening on http://{host}:{port}");

    axum::serve(listener, create_router(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

async fn list_generators_handler(State(registry): State<Arc<Registry>>) -> Json<ListGeneratorsResponse> {
    let mut generators: Vec<GeneratorInfo> = registry
        .list_all()
        .into_iter()
        .map(|g| GeneratorInfo {
            name: g.name.clone(),
            description: g.description.clone(),
        })
        .collect();
    generators.sort_by(|a, b| a.name.cmp(&b.name));

    Json(ListGeneratorsResponse { generators })
}

async fn generate_handler(
    State(registry): State<Arc<Registry>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(GenerateRequest { template, input }) = payload?;

    // Script generators block on a child process.
    let code = tokio::task::spawn_blocking(move || registry.generate(&template, &input))
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(GenerateResponse { code }))
}
