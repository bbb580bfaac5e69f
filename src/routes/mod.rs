//! Route table and router for the public API.

use crate::handlers::{catalog, favorites, method_not_allowed, not_found, sitemap::sitemap};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn ep(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every endpoint [`api_routes`] registers, as listed by the sitemap.
pub const ENDPOINTS: &[Endpoint] = &[
    ep("GET", "/"),
    ep("GET", "/user"),
    ep("GET", "/people"),
    ep("GET", "/people/:id"),
    ep("GET", "/planets"),
    ep("GET", "/planets/:id"),
    ep("GET", "/users"),
    ep("GET", "/users/favorites"),
    ep("POST", "/users/favorites"),
    ep("PUT", "/users/favorites/:id"),
    ep("DELETE", "/users/favorites/:id"),
];

/// Unknown paths get a JSON 404, known paths with the wrong method a JSON 405.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap).fallback(method_not_allowed))
        .route("/user", get(catalog::hello).fallback(method_not_allowed))
        .route("/people", get(catalog::list_people).fallback(method_not_allowed))
        .route("/people/:id", get(catalog::read_person).fallback(method_not_allowed))
        .route("/planets", get(catalog::list_planets).fallback(method_not_allowed))
        .route("/planets/:id", get(catalog::read_planet).fallback(method_not_allowed))
        .route("/users", get(catalog::list_users).fallback(method_not_allowed))
        .route(
            "/users/favorites",
            get(favorites::list)
                .post(favorites::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/users/favorites/:id",
            put(favorites::update)
                .delete(favorites::delete)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

/// The served stack: [`api_routes`] with the body cap, CORS and request tracing.
/// Trailing slashes are trimmed before routing, so `/people/` reaches `/people`.
pub fn app(state: AppState, body_limit_bytes: usize) -> NormalizePath<Router> {
    let router = api_routes(state)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
