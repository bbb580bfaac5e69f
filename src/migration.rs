//! Schema DDL for the five tables. Idempotent: every statement is `IF NOT EXISTS`.
//! Foreign keys restrict deletion of referenced rows.

use crate::error::AppError;
use crate::store::Store;

const DDL: &[(&str, &str)] = &[
    (
        "user",
        r#"CREATE TABLE IF NOT EXISTS "user" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "email" VARCHAR(120) NOT NULL UNIQUE,
            "password" VARCHAR(80) NOT NULL,
            "is_active" BOOLEAN NOT NULL
        )"#,
    ),
    (
        "users",
        r#"CREATE TABLE IF NOT EXISTS "users" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "username" VARCHAR(120) NOT NULL UNIQUE,
            "password" VARCHAR(80) NOT NULL
        )"#,
    ),
    (
        "people",
        r#"CREATE TABLE IF NOT EXISTS "people" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" VARCHAR(120) NOT NULL UNIQUE,
            "gender" VARCHAR(120) NOT NULL
        )"#,
    ),
    (
        "planets",
        r#"CREATE TABLE IF NOT EXISTS "planets" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" VARCHAR(120) NOT NULL UNIQUE
        )"#,
    ),
    (
        "favorites",
        r#"CREATE TABLE IF NOT EXISTS "favorites" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "people_id" INTEGER REFERENCES "people" ("id") ON DELETE RESTRICT,
            "planets_id" INTEGER REFERENCES "planets" ("id") ON DELETE RESTRICT,
            "users_id" INTEGER REFERENCES "users" ("id") ON DELETE RESTRICT
        )"#,
    ),
];

/// Create any missing table. Referenced tables come before `favorites`.
pub async fn apply_migrations(store: &Store) -> Result<(), AppError> {
    for (table, ddl) in DDL {
        sqlx::query(ddl).execute(store.pool()).await?;
        tracing::debug!(table, "table ensured");
    }
    tracing::info!(tables = DDL.len(), "schema up to date");
    Ok(())
}
