use super::{Entity, Fields, People, Planets, TableDef, Users};
use crate::sql::BindValue;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Join row linking a user to a person and a planet. Every key is nullable.
#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub people_id: Option<i64>,
    pub planets_id: Option<i64>,
    pub users_id: Option<i64>,
}

impl Entity for Favorite {
    const DEF: TableDef = TableDef {
        table: "favorites",
        columns: &["people_id", "planets_id", "users_id"],
    };
    const NAME: &'static str = "favorite";
    type New = FavoriteFields;
}

/// Request body for creating or patching a favorite.
///
/// Outer `None` means the key was absent; `Some(None)` means an explicit `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FavoriteFields {
    #[serde(default, deserialize_with = "present")]
    pub people_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub planets_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub users_id: Option<Option<i64>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

impl Fields for FavoriteFields {
    fn fields(&self) -> Vec<(&'static str, BindValue)> {
        [
            ("people_id", self.people_id),
            ("planets_id", self.planets_id),
            ("users_id", self.users_id),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.map(|v| (col, BindValue::from(v))))
        .collect()
    }
}

/// Serialized favorite: relations are embedded, never bare ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FavoriteView {
    pub id: i64,
    pub users: Users,
    pub people: People,
    pub planets: Planets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_null_and_value_are_distinct() {
        let f: FavoriteFields =
            serde_json::from_str(r#"{"people_id": 4, "planets_id": null}"#).unwrap();
        assert_eq!(f.people_id, Some(Some(4)));
        assert_eq!(f.planets_id, Some(None));
        assert_eq!(f.users_id, None);
        assert_eq!(
            f.fields(),
            vec![("people_id", BindValue::I64(4)), ("planets_id", BindValue::Null)]
        );
    }

    #[test]
    fn empty_body_writes_nothing() {
        let f: FavoriteFields = serde_json::from_str("{}").unwrap();
        assert!(f.fields().is_empty());
    }

    #[test]
    fn non_integer_key_is_rejected() {
        assert!(serde_json::from_str::<FavoriteFields>(r#"{"users_id": "three"}"#).is_err());
    }

    #[test]
    fn view_embeds_relations_in_order() {
        let view = FavoriteView {
            id: 1,
            users: Users {
                id: 3,
                username: "han".into(),
                password: "falcon".into(),
            },
            people: People {
                id: 1,
                name: "Chewbacca".into(),
                gender: "male".into(),
            },
            planets: Planets {
                id: 2,
                name: "Kashyyyk".into(),
            },
        };
        let s = serde_json::to_string(&view).unwrap();
        assert_eq!(
            s,
            r#"{"id":1,"users":{"id":3,"username":"han"},"people":{"id":1,"name":"Chewbacca","gender":"male"},"planets":{"id":2,"name":"Kashyyyk"}}"#
        );
    }
}
