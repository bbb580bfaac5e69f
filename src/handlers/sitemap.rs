//! GET /: every registered endpoint.

use crate::routes::ENDPOINTS;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn sitemap() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "routes": ENDPOINTS })))
}
