//! Read-only catalog: greeting, people, planets, users.

use super::parse_id;
use crate::error::AppError;
use crate::model::{People, Planets, Users};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "msg": "Hello, this is your GET /user response " })),
    )
}

pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.get_all::<People>().await?;
    tracing::info!(count = rows.len(), "listed people");
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn read_person(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.store.get_by_id::<People>(id).await?;
    tracing::info!(id, "read person");
    Ok((StatusCode::OK, Json(row)))
}

pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.get_all::<Planets>().await?;
    tracing::info!(count = rows.len(), "listed planets");
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn read_planet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.store.get_by_id::<Planets>(id).await?;
    tracing::info!(id, "read planet");
    Ok((StatusCode::OK, Json(row)))
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.get_all::<Users>().await?;
    tracing::info!(count = rows.len(), "listed users");
    Ok((StatusCode::OK, Json(rows)))
}
