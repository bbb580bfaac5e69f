//! REST backend for people, planets, users and the favorites linking them.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, Endpoint, ENDPOINTS};
pub use service::{seed_from_path, FavoriteService, SeedData};
pub use settings::Settings;
pub use state::AppState;
pub use store::Store;
