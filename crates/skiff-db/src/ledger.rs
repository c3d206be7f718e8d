//! The migration ledger
//!
//! One row per applied migration, kept in the target database itself. A
//! file name's presence means its up block has executed successfully and
//! has not been reverted.

use crate::error::DbResult;
use crate::traits::Database;
use std::sync::Arc;

/// Name of the ledger table in the target database
///
/// Compile-time constant by design: the name is interpolated into SQL text
/// and must never come from user input.
pub const LEDGER_TABLE: &str = "__schema_migrations";

/// Tracks which migration files have been applied
pub struct Ledger {
    db: Arc<dyn Database>,
}

impl Ledger {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Idempotently create the ledger table if missing
    pub async fn ensure_table(&self) -> DbResult<()> {
        self.db
            .execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {LEDGER_TABLE} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    migration_file TEXT NOT NULL UNIQUE,
                    executed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )"
            ))
            .await
    }

    /// All recorded file names, in insertion order (most recently applied last)
    pub async fn list_applied(&self) -> DbResult<Vec<String>> {
        self.db
            .query_strings(&format!(
                "SELECT migration_file FROM {LEDGER_TABLE} ORDER BY id"
            ))
            .await
    }

    /// Like [`list_applied`](Self::list_applied), but treats a missing
    /// ledger table as an empty applied set
    ///
    /// Used by read-only flows (status, rollback of a fresh database) that
    /// must not create the table as a side effect.
    pub async fn list_applied_if_exists(&self) -> DbResult<Vec<String>> {
        if self.db.relation_exists(LEDGER_TABLE).await? {
            self.list_applied().await
        } else {
            Ok(Vec::new())
        }
    }

    /// Record a migration as applied, stamped with the current time
    ///
    /// Fails if the file name is already recorded.
    pub async fn record(&self, file_name: &str) -> DbResult<()> {
        self.db
            .execute_params(
                &format!("INSERT INTO {LEDGER_TABLE} (migration_file) VALUES (?1)"),
                &[file_name.to_string()],
            )
            .await?;
        Ok(())
    }

    /// Delete the entry for a file name, returning the rows affected
    ///
    /// Zero rows means the name was not recorded; callers decide whether
    /// that matters.
    pub async fn unrecord(&self, file_name: &str) -> DbResult<usize> {
        self.db
            .execute_params(
                &format!("DELETE FROM {LEDGER_TABLE} WHERE migration_file = ?1"),
                &[file_name.to_string()],
            )
            .await
    }

    /// The most recently inserted file name, if any
    pub async fn latest(&self) -> DbResult<Option<String>> {
        let mut rows = self
            .db
            .query_strings(&format!(
                "SELECT migration_file FROM {LEDGER_TABLE} ORDER BY id DESC LIMIT 1"
            ))
            .await?;
        Ok(rows.pop())
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
