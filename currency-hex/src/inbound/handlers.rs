//! Plain HTTP handlers served next to the MCP endpoint.

use axum::{Json, response::IntoResponse};

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
