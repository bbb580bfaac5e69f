use super::{Entity, Fields, TableDef};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub gender: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPeople {
    pub name: String,
    pub gender: String,
}

impl Fields for NewPeople {
    fn fields(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", self.name.as_str().into()),
            ("gender", self.gender.as_str().into()),
        ]
    }
}

impl Entity for People {
    const DEF: TableDef = TableDef {
        table: "people",
        columns: &["name", "gender"],
    };
    const NAME: &'static str = "person";
    type New = NewPeople;
}
