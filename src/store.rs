//! Persistence gateway: generic get/insert/update/delete over any [`Entity`].

use crate::error::{AppError, ConfigError};
use crate::model::{Entity, Fields};
use crate::sql::{delete, insert, select_by_id, select_by_id_in, select_list, update, QueryBuf};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Cloneable handle over the connection pool; handed to handlers through router state.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool for a `sqlite:` url, creating the file if needed and enforcing foreign keys.
    /// In-memory databases live as long as their connection, so they get exactly one that never expires.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| ConfigError::Load(format!("invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        }
        .connect_with(opts)
        .await
        .map_err(AppError::Db)?;
        tracing::info!(in_memory, "database pool ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every row, in insertion order.
    pub async fn get_all<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        self.fetch_all(&select_list(&T::DEF)).await
    }

    pub async fn find_by_id<T: Entity>(&self, id: i64) -> Result<Option<T>, AppError> {
        self.fetch_optional(&select_by_id(&T::DEF, id)).await
    }

    /// Row with primary key `id`, or NotFound.
    pub async fn get_by_id<T: Entity>(&self, id: i64) -> Result<T, AppError> {
        self.find_by_id(id).await?.ok_or_else(|| not_found::<T>())
    }

    /// Rows whose id is in `ids`; missing ids are simply absent from the result.
    pub async fn get_where_id_in<T: Entity>(&self, ids: &[i64]) -> Result<Vec<T>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_all(&select_by_id_in(&T::DEF, ids)).await
    }

    /// Insert one row and return it with its assigned id.
    pub async fn insert<T: Entity>(&self, new: &T::New) -> Result<T, AppError> {
        let q = insert(&T::DEF, &new.fields());
        self.fetch_optional(&q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Write only the fields present in `patch`; returns the row as stored afterwards.
    pub async fn update_fields<T: Entity>(
        &self,
        id: i64,
        patch: &impl Fields,
    ) -> Result<T, AppError> {
        let q = update(&T::DEF, id, &patch.fields());
        self.fetch_optional(&q).await?.ok_or_else(|| not_found::<T>())
    }

    pub async fn delete<T: Entity>(&self, id: i64) -> Result<(), AppError> {
        let q = delete(&T::DEF, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let done = query.execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(not_found::<T>());
        }
        Ok(())
    }

    async fn fetch_all<T: Entity>(&self, q: &QueryBuf) -> Result<Vec<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_optional<T: Entity>(&self, q: &QueryBuf) -> Result<Option<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }
}

fn not_found<T: Entity>() -> AppError {
    AppError::NotFound(format!("{} not found", T::NAME))
}
