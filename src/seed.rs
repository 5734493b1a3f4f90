//! Batch seeding of a table from a delimited text file.
//!
//! Each line of the seed file is read as a CSV record. Only the first column is used;
//! it is split on an internal separator (`#` by default) into the values of one row.
//! All rows are folded into a single multi-row `INSERT`.
//!
//! ```text
//! prefix : INSERT INTO users (name, email, age) VALUES
//! line   : ann#ann@example.com#NULL
//! tuple  : ('ann','ann@example.com',NULL)
//! ```
//!
//! # Quoting
//!
//! The default [`QuoteHandling::Strip`] deletes every `'` from a value before quoting
//! it, so `o'brien` is stored as `obrien`. This keeps compatibility with existing seed
//! files but silently alters data and must not be used with untrusted input. Under
//! `Strip` the statement also runs through [`insert_row`](crate::sqlite::insert_row),
//! so the query cleaner rewrites keyword sequences and whitespace inside values too:
//! `Rock AND  Roll` is stored as `Rock AND Roll`.
//!
//! [`QuoteHandling::Double`] escapes quotes the SQL-standard way and executes the
//! statement verbatim through [`execute_statement`](crate::sqlite::execute_statement),
//! so values are stored exactly as they appear in the file.

use crate::error::UtilsResult;
use crate::query::trim_suffix;
use crate::sqlite::{execute_statement, insert_row};
use csv::ReaderBuilder;
use rusqlite::Connection;
use std::path::Path;

/// Literal token rendered as an unquoted SQL `NULL`
pub const NULL_TOKEN: &str = "NULL";

/// Default separator between values inside a record
pub const DEFAULT_SEPARATOR: char = '#';

/// How single quotes inside a value are made safe for a quoted SQL literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteHandling {
    /// Remove every `'`
    #[default]
    Strip,
    /// Replace every `'` with `''` and skip the query cleaner, keeping values intact
    Double,
}

/// A fully rendered batch insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStatement {
    /// The `INSERT ... VALUES (..),(..)` text
    pub sql: String,
    /// Number of value tuples in `sql`
    pub rows: usize,
}

/// Builder for seeding runs.
#[derive(Debug, Clone)]
pub struct CsvSeeder {
    separator: char,
    quote_handling: QuoteHandling,
}

impl Default for CsvSeeder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote_handling: QuoteHandling::default(),
        }
    }
}

impl CsvSeeder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator between values inside a record.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the quote policy.
    pub fn quote_handling(mut self, quote_handling: QuoteHandling) -> Self {
        self.quote_handling = quote_handling;
        self
    }

    /// Render one value as a SQL literal.
    pub fn render_value(&self, value: &str) -> String {
        match self.quote_handling {
            QuoteHandling::Strip => {
                let stripped = value.replace('\'', "");
                if stripped == NULL_TOKEN {
                    NULL_TOKEN.to_string()
                } else {
                    format!("'{stripped}'")
                }
            }
            QuoteHandling::Double => {
                if value == NULL_TOKEN {
                    NULL_TOKEN.to_string()
                } else {
                    format!("'{}'", value.replace('\'', "''"))
                }
            }
        }
    }

    /// Render one record field as a parenthesized tuple.
    pub fn render_row(&self, field: &str) -> String {
        let values: Vec<String> = field
            .split(self.separator)
            .map(|value| self.render_value(value))
            .collect();
        format!("({})", values.join(","))
    }

    /// Read `path` and assemble the batch insert without running it.
    ///
    /// Returns `None` when the file holds no records.
    pub fn build_statement(
        &self,
        path: impl AsRef<Path>,
        insert_prefix: &str,
    ) -> UtilsResult<Option<SeedStatement>> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut sql = insert_prefix.to_string();
        let mut rows = 0usize;
        let mut quoted = 0usize;

        for result in reader.records() {
            let record = result?;
            let Some(field) = record.get(0) else {
                continue;
            };
            if record.len() == 1 && field.is_empty() {
                continue;
            }
            if self.quote_handling == QuoteHandling::Strip && field.contains('\'') {
                quoted += 1;
            }
            sql.push_str(&self.render_row(field));
            sql.push(',');
            rows += 1;
        }

        if quoted > 0 {
            tracing::debug!(
                path = %path.display(),
                rows = quoted,
                "stripped single quotes from seed values"
            );
        }

        if rows == 0 {
            return Ok(None);
        }

        let sql = trim_suffix(&sql, ",").to_string();
        Ok(Some(SeedStatement { sql, rows }))
    }

    /// Seed the table described by `insert_prefix` from `path`.
    ///
    /// Returns the number of rows inserted. An empty file inserts nothing.
    pub fn seed(
        &self,
        conn: &Connection,
        path: impl AsRef<Path>,
        insert_prefix: &str,
    ) -> UtilsResult<usize> {
        let path = path.as_ref();
        let Some(statement) = self.build_statement(path, insert_prefix)? else {
            tracing::info!(path = %path.display(), "seed file is empty, nothing inserted");
            return Ok(0);
        };

        let inserted = match self.quote_handling {
            QuoteHandling::Strip => insert_row(conn, &statement.sql, &[])?,
            QuoteHandling::Double => execute_statement(conn, &statement.sql, &[])?,
        };
        tracing::info!(path = %path.display(), rows = inserted, "seeded rows from file");
        Ok(inserted)
    }
}

/// Seed with the default `#` separator and quote stripping.
///
/// `insert_prefix` is everything up to and including `VALUES`, e.g.
/// `"INSERT INTO users (name, email) VALUES "`.
pub fn seed_from_csv(
    conn: &Connection,
    path: impl AsRef<Path>,
    insert_prefix: &str,
) -> UtilsResult<usize> {
    CsvSeeder::default().seed(conn, path, insert_prefix)
}
