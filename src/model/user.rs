use super::{Entity, Fields, TableDef};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Login account keyed by email.
#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl Fields for NewUser {
    fn fields(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("email", self.email.as_str().into()),
            ("password", self.password.as_str().into()),
            ("is_active", self.is_active.into()),
        ]
    }
}

impl Entity for User {
    const DEF: TableDef = TableDef {
        table: "user",
        columns: &["email", "password", "is_active"],
    };
    const NAME: &'static str = "user account";
    type New = NewUser;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_and_flag_are_not_serialized() {
        let user = User {
            id: 1,
            email: "luke@rebels.org".into(),
            password: "hunter2".into(),
            is_active: true,
        };
        let v = serde_json::to_value(&user).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1, "email": "luke@rebels.org"}));
    }
}
