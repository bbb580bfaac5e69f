use serde_json::json;
use swapi_favorites::{apply_migrations, SeedData, Store};

/// Fresh in-memory database with the schema applied and a small catalog:
/// people 1-2, planets 1-5, users 1-3.
pub async fn seeded_store() -> Store {
    let store = Store::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    apply_migrations(&store).await.expect("Failed to migrate");

    let data: SeedData = serde_json::from_value(json!({
        "user": [
            {"email": "admin@rebellion.org", "password": "r2d2", "is_active": true}
        ],
        "users": [
            {"username": "han", "password": "falcon"},
            {"username": "leia", "password": "alderaan"},
            {"username": "luke", "password": "x-wing"}
        ],
        "people": [
            {"name": "Luke Skywalker", "gender": "male"},
            {"name": "Leia Organa", "gender": "female"}
        ],
        "planets": [
            {"name": "Tatooine"},
            {"name": "Alderaan"},
            {"name": "Yavin IV"},
            {"name": "Hoth"},
            {"name": "Dagobah"}
        ]
    }))
    .unwrap();
    data.apply(&store).await.expect("Failed to seed");
    store
}
