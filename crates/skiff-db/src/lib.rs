//! skiff-db - Database layer for Skiff
//!
//! This crate provides the `Database` trait with a SQLite implementation,
//! the migration ledger, and the runner that applies and reverts
//! migrations.

pub mod error;
pub mod ledger;
pub mod runner;
pub mod sqlite;
pub mod traits;

pub use error::{DbError, DbResult};
pub use ledger::{Ledger, LEDGER_TABLE};
pub use runner::{RollbackStep, RunSummary, Runner, RunnerError, RunnerResult, StatusEntry};
pub use sqlite::SqliteBackend;
pub use traits::Database;
