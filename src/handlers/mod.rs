//! HTTP handlers for the catalog, favorites and the sitemap.

pub mod catalog;
pub mod favorites;
pub mod sitemap;

use crate::error::AppError;

pub const ROUTE_NOT_FOUND: &str = "resource not found";

/// Path ids are unsigned decimal integers. Anything else means the route does not match,
/// so it yields the generic 404 rather than a 400.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(ROUTE_NOT_FOUND.into()));
    }
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(ROUTE_NOT_FOUND.into()))
}

pub async fn not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND.into())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
