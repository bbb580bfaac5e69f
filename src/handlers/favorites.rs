//! Favorites CRUD under /users/favorites.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::FavoriteFields;
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = FavoriteService::list(&state.store).await?;
    tracing::info!(count = rows.len(), "listed favorites");
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FavoriteFields>,
) -> Result<impl IntoResponse, AppError> {
    let view = FavoriteService::create(&state.store, &body).await?;
    Ok((StatusCode::OK, Json(view)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<FavoriteFields>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let view = FavoriteService::update(&state.store, id, &body).await?;
    Ok((StatusCode::OK, Json(view)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    FavoriteService::delete(&state.store, id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "favorite deleted" }))))
}
