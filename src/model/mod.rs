//! Record types for the five tables and the metadata the generic store needs.

mod favorites;
mod people;
mod planets;
mod user;
mod users;

pub use favorites::{Favorite, FavoriteFields, FavoriteView};
pub use people::{NewPeople, People};
pub use planets::{NewPlanet, Planets};
pub use user::{NewUser, User};
pub use users::{NewUsers, Users};

use crate::sql::BindValue;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Table name plus writable columns. Every table also has an integer `id` primary key.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

impl TableDef {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| *c == name)
    }
}

/// A persisted record the store can read and write generically.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    const DEF: TableDef;
    /// Used in error messages, e.g. "planet not found".
    const NAME: &'static str;
    /// Payload accepted by insert.
    type New: Fields + Send + Sync;
}

/// Column/value pairs to write. Columns left out keep their stored (or default) value.
pub trait Fields {
    fn fields(&self) -> Vec<(&'static str, BindValue)>;
}
