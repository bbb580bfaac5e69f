//! Favorites with their relations expanded into full objects.

use crate::error::AppError;
use crate::model::{Favorite, FavoriteFields, FavoriteView, People, Planets, Users};
use crate::store::Store;
use std::collections::HashMap;

pub struct FavoriteService;

impl FavoriteService {
    /// Every favorite, expanded. Relations are batch-loaded with one query per related table.
    pub async fn list(store: &Store) -> Result<Vec<FavoriteView>, AppError> {
        let rows = store.get_all::<Favorite>().await?;
        Self::expand(store, rows).await
    }

    /// All three keys must be set, so a rejected create never leaves a row behind.
    pub async fn create(store: &Store, fields: &FavoriteFields) -> Result<FavoriteView, AppError> {
        require_all_keys(fields)?;
        let row = store.insert::<Favorite>(fields).await?;
        tracing::info!(id = row.id, "favorite created");
        Self::expand_one(store, row).await
    }

    pub async fn update(
        store: &Store,
        id: i64,
        patch: &FavoriteFields,
    ) -> Result<FavoriteView, AppError> {
        let row = store.update_fields::<Favorite>(id, patch).await?;
        tracing::info!(id, "favorite updated");
        Self::expand_one(store, row).await
    }

    pub async fn delete(store: &Store, id: i64) -> Result<(), AppError> {
        store.delete::<Favorite>(id).await?;
        tracing::info!(id, "favorite deleted");
        Ok(())
    }

    pub async fn expand_one(store: &Store, row: Favorite) -> Result<FavoriteView, AppError> {
        let mut views = Self::expand(store, vec![row]).await?;
        views
            .pop()
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Fails with NotFound on the first favorite whose relation is unset or points at a missing row.
    pub async fn expand(store: &Store, rows: Vec<Favorite>) -> Result<Vec<FavoriteView>, AppError> {
        let people = by_id(store.get_where_id_in::<People>(&ids(&rows, |f| f.people_id)).await?, |p| p.id);
        let planets =
            by_id(store.get_where_id_in::<Planets>(&ids(&rows, |f| f.planets_id)).await?, |p| p.id);
        let users = by_id(store.get_where_id_in::<Users>(&ids(&rows, |f| f.users_id)).await?, |u| u.id);

        rows.into_iter()
            .map(|f| {
                Ok(FavoriteView {
                    id: f.id,
                    users: related(&users, f.id, f.users_id, "users")?,
                    people: related(&people, f.id, f.people_id, "people")?,
                    planets: related(&planets, f.id, f.planets_id, "planets")?,
                })
            })
            .collect()
    }
}

fn require_all_keys(fields: &FavoriteFields) -> Result<(), AppError> {
    let keys = [
        ("people_id", fields.people_id),
        ("planets_id", fields.planets_id),
        ("users_id", fields.users_id),
    ];
    match keys.iter().find(|(_, v)| !matches!(v, Some(Some(_)))) {
        Some((key, _)) => Err(AppError::BadRequest(format!("{} is required", key))),
        None => Ok(()),
    }
}

fn ids(rows: &[Favorite], key: impl Fn(&Favorite) -> Option<i64>) -> Vec<i64> {
    let mut out: Vec<i64> = rows.iter().filter_map(key).collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> i64) -> HashMap<i64, T> {
    rows.into_iter().map(|r| (id(&r), r)).collect()
}

fn related<T: Clone>(
    loaded: &HashMap<i64, T>,
    favorite_id: i64,
    key: Option<i64>,
    relation: &str,
) -> Result<T, AppError> {
    key.and_then(|k| loaded.get(&k).cloned()).ok_or_else(|| {
        AppError::NotFound(format!("favorite {} has no {}", favorite_id, relation))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_skip_nulls() {
        let rows = vec![
            Favorite { id: 1, people_id: Some(3), planets_id: None, users_id: Some(1) },
            Favorite { id: 2, people_id: Some(3), planets_id: Some(2), users_id: None },
            Favorite { id: 3, people_id: Some(1), planets_id: None, users_id: None },
        ];
        assert_eq!(ids(&rows, |f| f.people_id), vec![1, 3]);
        assert_eq!(ids(&rows, |f| f.planets_id), vec![2]);
    }

    #[test]
    fn create_needs_every_key() {
        let full = FavoriteFields {
            people_id: Some(Some(1)),
            planets_id: Some(Some(2)),
            users_id: Some(Some(3)),
        };
        assert!(require_all_keys(&full).is_ok());

        let absent = FavoriteFields { planets_id: None, ..full.clone() };
        assert_eq!(require_all_keys(&absent).unwrap_err().to_string(), "planets_id is required");

        let null = FavoriteFields { users_id: Some(None), ..full };
        assert!(matches!(require_all_keys(&null), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn unset_relation_is_not_found() {
        let loaded: HashMap<i64, Planets> = HashMap::new();
        let err = related(&loaded, 9, None, "planets").unwrap_err();
        assert_eq!(err.to_string(), "favorite 9 has no planets");
        let err = related(&loaded, 9, Some(4), "planets").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
