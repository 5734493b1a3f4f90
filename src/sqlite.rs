use crate::error::UtilsResult;
use crate::query::clean_query;
use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection, OptionalExtension, ToSql};

/// Core value types bound to SQL placeholders
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Boolean(bool),
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            // SQLite has no boolean storage class
            Value::Boolean(b) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*b))),
        })
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Check whether `query` selects at least one row.
///
/// The query is wrapped as `SELECT EXISTS (<query>)`. A query that yields no
/// row at all counts as `false` rather than an error.
pub fn row_exists(conn: &Connection, query: &str, args: &[Value]) -> UtilsResult<bool> {
    let sql = format!("SELECT EXISTS ({query})");
    tracing::debug!(target: "rust_utils.sql", sql = %sql, args = args.len(), "checking row existence");
    let exists = conn
        .query_row(&sql, params_from_iter(args.iter()), |row| row.get::<_, bool>(0))
        .optional()?;
    Ok(exists.unwrap_or(false))
}

/// Clean, prepare and execute an UPDATE. Returns the number of rows changed.
pub fn update_row(conn: &Connection, query: &str, args: &[Value]) -> UtilsResult<usize> {
    execute_cleaned(conn, "update", query, args)
}

/// Clean, prepare and execute an INSERT. Returns the number of rows inserted.
pub fn insert_row(conn: &Connection, query: &str, args: &[Value]) -> UtilsResult<usize> {
    execute_cleaned(conn, "insert", query, args)
}

/// Prepare and execute `query` exactly as given, without [`clean_query`].
///
/// For statements whose literal text must reach SQLite untouched.
pub fn execute_statement(conn: &Connection, query: &str, args: &[Value]) -> UtilsResult<usize> {
    execute_prepared(conn, "raw", query, args)
}

fn execute_cleaned(
    conn: &Connection,
    kind: &'static str,
    query: &str,
    args: &[Value],
) -> UtilsResult<usize> {
    execute_prepared(conn, kind, &clean_query(query), args)
}

fn execute_prepared(
    conn: &Connection,
    kind: &'static str,
    sql: &str,
    args: &[Value],
) -> UtilsResult<usize> {
    tracing::debug!(target: "rust_utils.sql", kind, sql = %sql, args = args.len(), "executing statement");
    let mut stmt = conn.prepare(sql)?;
    let affected = stmt.execute(params_from_iter(args.iter()))?;
    Ok(affected)
}
