//! Boots the API: settings from env, SQLite pool, schema, optional seed, then serves.
//!
//! Run from repo root: `cargo run -p server`

use axum::{extract::Request, ServiceExt};
use swapi_favorites::{app, apply_migrations, seed_from_path, telemetry, AppState, Settings, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let settings = Settings::from_env()?;
    let store = Store::connect(&settings.database_url).await?;
    apply_migrations(&store).await?;
    if let Some(path) = &settings.seed_path {
        seed_from_path(&store, path).await?;
    }

    let app = app(AppState::new(store), settings.body_limit_bytes);

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
