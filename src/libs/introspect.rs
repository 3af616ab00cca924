use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Connection, Row};

use crate::libs::error::{Error, Result};
use crate::libs::schema::{ColumnDescriptor, TableMetadata};

// A pattern, not a parser: first match only, no quoted or schema-qualified
// names, and `IF NOT EXISTS` captures "IF".
static CREATE_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)create table\s+(\w+)").expect("valid CREATE TABLE regex"));

/// Name following the first `create table` in `sql`, case-insensitive.
pub fn extract_table_name(sql: &str) -> Result<&str> {
    CREATE_TABLE
        .captures(sql)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(Error::NoCreateTable)
}

/// Run `sql` against a throwaway in-memory SQLite database and describe the
/// table it creates.
///
/// Every call gets its own connection; nothing outlives the call.
pub async fn introspect(sql: &str) -> Result<TableMetadata> {
    let table = extract_table_name(sql)?.to_string();

    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    sqlx::raw_sql(sql)
        .execute(&mut conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) => Error::InvalidSchema(db.message().to_string()),
            other => Error::Database(other),
        })?;

    let pragma = format!("PRAGMA table_info({})", table);
    let rows = sqlx::query(&pragma).fetch_all(&mut conn).await?;

    let mut columns = Vec::with_capacity(rows.len());
    for r in &rows {
        columns.push(column_from_row(r)?);
    }

    conn.close().await?;

    tracing::debug!(table = %table, columns = columns.len(), "introspected schema");

    Ok(TableMetadata {
        name: table,
        columns,
    })
}

fn column_from_row(r: &SqliteRow) -> Result<ColumnDescriptor> {
    Ok(ColumnDescriptor {
        ordinal: r.try_get::<i64, _>("cid")?,
        name: r.try_get::<String, _>("name")?,
        declared_type: r.try_get::<String, _>("type")?,
        not_null: r.try_get::<i64, _>("notnull")? != 0,
        default_value: r.try_get::<Option<String>, _>("dflt_value")?,
        // pk is the 1-based position within the key, 0 when not part of it
        is_primary_key: r.try_get::<i64, _>("pk")? > 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_table_name() {
        assert_eq!(
            extract_table_name("CREATE TABLE users (id INTEGER)").unwrap(),
            "users"
        );
        assert_eq!(
            extract_table_name("create   table\n  Orders(id int)").unwrap(),
            "Orders"
        );
        assert_eq!(
            extract_table_name("create table a (x); create table b (y);").unwrap(),
            "a"
        );
    }

    #[test]
    fn missing_create_table_is_an_error() {
        let err = extract_table_name("select 1").unwrap_err();
        assert!(matches!(err, Error::NoCreateTable));
    }

    #[tokio::test]
    async fn introspects_columns_in_declaration_order() {
        let table = introspect(
            "create table users (id INTEGER PRIMARY KEY, name TEXT, created_at DATE)",
        )
        .await
        .unwrap();

        assert_eq!(table.name, "users");
        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "created_at"]);
        let ordinals: Vec<_> = table.columns.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2]);
        assert_eq!(table.columns[0].declared_type, "INTEGER");
        assert_eq!(table.columns[2].declared_type, "DATE");
    }

    #[tokio::test]
    async fn reports_constraints_and_defaults() {
        let table = introspect(
            "CREATE TABLE item (
                code VARCHAR(20) NOT NULL,
                qty INT DEFAULT 0,
                note TEXT,
                PRIMARY KEY (code)
            )",
        )
        .await
        .unwrap();

        let code = &table.columns[0];
        assert!(code.not_null);
        assert!(code.is_primary_key);
        assert_eq!(code.declared_type, "VARCHAR(20)");

        let qty = &table.columns[1];
        assert!(!qty.is_primary_key);
        assert_eq!(qty.default_value.as_deref(), Some("0"));

        assert_eq!(table.columns[2].default_value, None);
        assert!(!table.columns[2].not_null);
    }

    #[tokio::test]
    async fn runs_whole_script() {
        let table = introspect(
            "CREATE TABLE parent (id INTEGER PRIMARY KEY);
             CREATE INDEX ix ON parent(id);",
        )
        .await
        .unwrap();
        assert_eq!(table.name, "parent");
        assert_eq!(table.columns.len(), 1);
    }

    #[tokio::test]
    async fn rejected_sql_is_invalid_schema() {
        let err = introspect("create table broken (id INTEGER,,)").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn calls_do_not_share_state() {
        introspect("create table t (a TEXT)").await.unwrap();
        // would fail with "table t already exists" on a shared database
        let table = introspect("create table t (b INTEGER, c REAL)").await.unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "b");
    }
}
