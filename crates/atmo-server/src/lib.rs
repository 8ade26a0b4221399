//! HTTP wrapper around the layer classifier.
//!
//! - `GET /health`
//! - `GET /layer?altitude=<f64>&unit=<km|mi>`
//! - `POST /batch` with `[{"altitude": .., "unit": ..}]`

use std::net::SocketAddr;

use atmo_layers::{describe, Report};
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct LayerQuery {
    pub altitude: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "km".to_string()
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Classify(#[from] atmo_layers::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Classify(atmo_layers::Error::InvalidUnit(_)) => StatusCode::BAD_REQUEST,
            AppError::Classify(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::debug!("request failed ({}): {}", status, self);
        let body = Json(serde_json::json!({
            "detail": self.to_string()
        }));
        (status, body).into_response()
    }
}

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/layer", get(get_layer))
        .route("/batch", post(post_batch))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

async fn get_layer(Query(q): Query<LayerQuery>) -> Result<Json<Report>, AppError> {
    Ok(Json(describe(q.altitude, &q.unit)?))
}

/// All-or-nothing: one bad unit rejects the whole request.
async fn post_batch(Json(items): Json<Vec<LayerQuery>>) -> Result<Json<Vec<Report>>, AppError> {
    let reports = items
        .iter()
        .map(|q| describe(q.altitude, &q.unit))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("classified batch of {}", reports.len());
    Ok(Json(reports))
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
