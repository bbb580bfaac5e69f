//! Fixture loading for populating a fresh database.

use crate::error::{AppError, ConfigError};
use crate::model::{Favorite, FavoriteFields, NewPeople, NewPlanet, NewUser, NewUsers, People, Planets, User, Users};
use crate::store::Store;
use serde::Deserialize;
use std::path::Path;

/// Fixture document. Every list is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub user: Vec<NewUser>,
    #[serde(default)]
    pub users: Vec<NewUsers>,
    #[serde(default)]
    pub people: Vec<NewPeople>,
    #[serde(default)]
    pub planets: Vec<NewPlanet>,
    #[serde(default)]
    pub favorites: Vec<FavoriteFields>,
}

impl SeedData {
    /// Insert everything, referenced tables first. Stops at the first failing row.
    pub async fn apply(&self, store: &Store) -> Result<usize, AppError> {
        for u in &self.user {
            store.insert::<User>(u).await?;
        }
        for u in &self.users {
            store.insert::<Users>(u).await?;
        }
        for p in &self.people {
            store.insert::<People>(p).await?;
        }
        for p in &self.planets {
            store.insert::<Planets>(p).await?;
        }
        for f in &self.favorites {
            store.insert::<Favorite>(f).await?;
        }
        Ok(self.user.len() + self.users.len() + self.people.len() + self.planets.len() + self.favorites.len())
    }
}

/// Read a JSON fixture file and insert its rows.
pub async fn seed_from_path(store: &Store, path: &Path) -> Result<usize, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let data: SeedData = serde_json::from_str(&raw)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let count = data.apply(store).await?;
    tracing::info!(path = %path.display(), rows = count, "seed data loaded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_parses() {
        let data: SeedData =
            serde_json::from_str(r#"{"planets": [{"name": "Tatooine"}], "favorites": [{"planets_id": 1}]}"#)
                .unwrap();
        assert_eq!(data.planets.len(), 1);
        assert!(data.people.is_empty());
        assert_eq!(data.favorites[0].planets_id, Some(Some(1)));
    }

    #[test]
    fn unknown_table_is_rejected() {
        assert!(serde_json::from_str::<SeedData>(r#"{"starships": []}"#).is_err());
    }
}
