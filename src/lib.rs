//! SQL, filesystem and string helpers for the Runar ecosystem.
//!
//! # Intention
//!
//! - Collect the small helpers Runar tools keep rewriting: row checks and batch
//!   seeding over SQLite, query cleanup, file and log writes, random strings.
//! - Return every failure as a [`UtilsError`]; nothing here aborts the process.
//!
//! # Architectural Boundaries
//!
//! - Each function is a thin, stateless, synchronous wrapper.
//! - Connections, transactions and retry policy belong to the caller.
//! - Logging goes through `tracing`; installing a subscriber is the caller's job.

pub mod config;
pub mod error;
pub mod fs;
pub mod monitor;
pub mod query;
pub mod random;
pub mod seed;
pub mod sqlite;
pub mod strings;

pub use config::LogFileConfig;
pub use error::{UtilsError, UtilsResult};
pub use query::{clean_query, trim_suffix};
pub use seed::{seed_from_csv, CsvSeeder, QuoteHandling, SeedStatement};
pub use sqlite::{execute_statement, insert_row, row_exists, update_row, Value};
