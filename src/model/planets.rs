use super::{Entity, Fields, TableDef};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize)]
pub struct Planets {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub name: String,
}

impl Fields for NewPlanet {
    fn fields(&self) -> Vec<(&'static str, BindValue)> {
        vec![("name", self.name.as_str().into())]
    }
}

impl Entity for Planets {
    const DEF: TableDef = TableDef {
        table: "planets",
        columns: &["name"],
    };
    const NAME: &'static str = "planet";
    type New = NewPlanet;
}
