use super::{Entity, Fields, TableDef};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Site member keyed by username; the owner side of a favorite.
#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize)]
pub struct Users {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUsers {
    pub username: String,
    pub password: String,
}

impl Fields for NewUsers {
    fn fields(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("username", self.username.as_str().into()),
            ("password", self.password.as_str().into()),
        ]
    }
}

impl Entity for Users {
    const DEF: TableDef = TableDef {
        table: "users",
        columns: &["username", "password"],
    };
    const NAME: &'static str = "user";
    type New = NewUsers;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let users = Users {
            id: 7,
            username: "leia".into(),
            password: "alderaan".into(),
        };
        let v = serde_json::to_value(&users).unwrap();
        assert_eq!(v, serde_json::json!({"id": 7, "username": "leia"}));
    }
}
