//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table definition.

use super::BindValue;
use crate::model::TableDef;

/// Primary key column shared by every table.
pub const PK: &str = "id";

/// Quote identifier for SQLite (safe: only from table definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// `id` followed by every writable column.
fn select_column_list(def: &TableDef) -> String {
    std::iter::once(PK)
        .chain(def.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key, which is insertion order.
pub fn select_list(def: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(def),
        quoted(def.table),
        quoted(PK)
    );
    q
}

pub fn select_by_id(def: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?{}",
        select_column_list(def),
        quoted(def.table),
        quoted(PK),
        n
    );
    q
}

/// SELECT rows whose id is in `ids`. Used for batch-loading related rows.
pub fn select_by_id_in(def: &TableDef, ids: &[i64]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = select_column_list(def);
    let table = quoted(def.table);
    if ids.is_empty() {
        q.sql = format!("SELECT {} FROM {} WHERE 1 = 0", cols, table);
        return q;
    }
    let placeholders: Vec<String> = ids
        .iter()
        .map(|id| format!("?{}", q.push_param((*id).into())))
        .collect();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} IN ({}) ORDER BY {}",
        cols,
        table,
        quoted(PK),
        placeholders.join(", "),
        quoted(PK)
    );
    q
}

/// INSERT the given fields; columns not provided take their DB default (NULL for nullable keys).
/// Fields naming unknown columns are ignored.
pub fn insert(def: &TableDef, fields: &[(&str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(def.table);
    let returning = select_column_list(def);
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, val) in fields {
        if !def.has_column(name) {
            continue;
        }
        let n = q.push_param(val.clone());
        cols.push(quoted(name));
        placeholders.push(format!("?{}", n));
    }
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table,
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE by id: SET only the given fields. With nothing to set this degrades to a
/// SELECT by id so callers still get the row back (or nothing when absent).
pub fn update(def: &TableDef, id: i64, fields: &[(&str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, val) in fields {
        if *name == PK || !def.has_column(name) {
            continue;
        }
        let n = q.push_param(val.clone());
        sets.push(format!("{} = ?{}", quoted(name), n));
    }
    if sets.is_empty() {
        return select_by_id(def, id);
    }
    let id_param = q.push_param(id.into());
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{} RETURNING {}",
        quoted(def.table),
        sets.join(", "),
        quoted(PK),
        id_param,
        select_column_list(def)
    );
    q
}

pub fn delete(def: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!("DELETE FROM {} WHERE {} = ?{}", quoted(def.table), quoted(PK), n);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAV: TableDef = TableDef {
        table: "favorites",
        columns: &["people_id", "planets_id", "users_id"],
    };

    #[test]
    fn list_orders_by_id() {
        let q = select_list(&FAV);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "people_id", "planets_id", "users_id" FROM "favorites" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_skips_unknown_columns() {
        let q = insert(&FAV, &[("people_id", BindValue::I64(1)), ("id", BindValue::I64(99)), ("bogus", "x".into())]);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "favorites" ("people_id") VALUES (?1) RETURNING "id", "people_id", "planets_id", "users_id""#
        );
        assert_eq!(q.params, vec![BindValue::I64(1)]);
    }

    #[test]
    fn insert_without_fields_uses_defaults() {
        let q = insert(&FAV, &[]);
        assert!(q.sql.starts_with(r#"INSERT INTO "favorites" DEFAULT VALUES"#));
    }

    #[test]
    fn update_binds_id_last() {
        let q = update(&FAV, 4, &[("planets_id", BindValue::I64(5)), ("users_id", BindValue::Null)]);
        assert_eq!(
            q.sql,
            r#"UPDATE "favorites" SET "planets_id" = ?1, "users_id" = ?2 WHERE "id" = ?3 RETURNING "id", "people_id", "planets_id", "users_id""#
        );
        assert_eq!(q.params, vec![BindValue::I64(5), BindValue::Null, BindValue::I64(4)]);
    }

    #[test]
    fn empty_update_reads_row() {
        let q = update(&FAV, 4, &[("id", BindValue::I64(8))]);
        assert!(q.sql.starts_with("SELECT"));
        assert_eq!(q.params, vec![BindValue::I64(4)]);
    }

    #[test]
    fn id_in_with_no_ids_matches_nothing() {
        assert!(select_by_id_in(&FAV, &[]).sql.ends_with("WHERE 1 = 0"));
        let q = select_by_id_in(&FAV, &[3, 1]);
        assert!(q.sql.contains(r#""id" IN (?1, ?2)"#));
    }
}
