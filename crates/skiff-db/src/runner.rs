//! Migration runner
//!
//! Orchestrates the up/down/status flows: diffs the migration store against
//! the ledger, executes each file's SQL block inside a transaction, and
//! updates the ledger one file at a time. The runner returns structured
//! results and never prints; presentation belongs to the caller.

use crate::error::DbError;
use crate::ledger::Ledger;
use crate::traits::Database;
use skiff_core::{discover, parse, CoreError, MigrationFile, ParsedMigration};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Runner errors, always naming the migration file involved
#[derive(Error, Debug)]
pub enum RunnerError {
    /// R001: the migration's SQL failed; the transaction was rolled back
    #[error("[R001] Migration '{file}' failed: {source}")]
    MigrationFailed { file: String, source: DbError },

    /// R002: the migration file could not be read from disk
    #[error("[R002] Cannot read migration '{file}': {source}")]
    UnreadableMigration {
        file: String,
        source: std::io::Error,
    },

    /// R003: the migration file could not be split into sections
    #[error("[R003] Cannot parse migration '{file}': {source}")]
    UnparsableMigration { file: String, source: CoreError },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Result type alias for RunnerError
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Files executed by an up or down run, in execution order
///
/// Empty means there was nothing to do, which is success.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub executed: Vec<String>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }
}

/// One migration file and whether the ledger records it as applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub file_name: String,
    pub applied: bool,
}

/// How far a rollback should reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackStep {
    /// Revert at most this many of the most recently applied migrations
    Count(usize),
    /// Revert everything the ledger records
    All,
}

/// Applies and reverts migrations against a single database connection
pub struct Runner {
    db: Arc<dyn Database>,
    ledger: Ledger,
    migrations_dir: PathBuf,
}

impl Runner {
    pub fn new(db: Arc<dyn Database>, migrations_dir: PathBuf) -> Self {
        let ledger = Ledger::new(db.clone());
        Self {
            db,
            ledger,
            migrations_dir,
        }
    }

    /// The ledger backing this runner
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Apply all pending migrations, lexically ascending
    ///
    /// Each file runs inside its own transaction; the ledger entry is a
    /// separate committed write after the transaction succeeds. The first
    /// failure halts the run, leaving earlier files applied and recorded
    /// and later files untouched. Re-running resumes at the failed file.
    pub async fn run_up(&self) -> RunnerResult<RunSummary> {
        self.ledger.ensure_table().await?;
        let applied = self.ledger.list_applied().await?;

        let pending: Vec<MigrationFile> = discover(&self.migrations_dir)?
            .into_iter()
            .filter(|m| !applied.contains(&m.file_name))
            .collect();

        let mut summary = RunSummary::default();
        for migration in pending {
            let parsed = self.load(&migration)?;
            log::debug!("applying {}", migration.file_name);

            self.db
                .execute_transactional(&parsed.up)
                .await
                .map_err(|source| RunnerError::MigrationFailed {
                    file: migration.file_name.clone(),
                    source,
                })?;
            self.ledger.record(&migration.file_name).await?;
            summary.executed.push(migration.file_name);
        }

        Ok(summary)
    }

    /// Revert applied migrations, most recently applied first
    ///
    /// Candidates come from ledger insertion order reversed, not file-name
    /// order; the two coincide when migrations were applied in name order.
    /// Each file is re-read from the store by name and fails the run if it
    /// no longer exists on disk. Halt semantics match [`run_up`](Self::run_up).
    pub async fn run_down(&self, step: RollbackStep) -> RunnerResult<RunSummary> {
        let mut candidates = self.ledger.list_applied_if_exists().await?;
        candidates.reverse();
        if let RollbackStep::Count(n) = step {
            candidates.truncate(n);
        }

        let mut summary = RunSummary::default();
        for file_name in candidates {
            let migration = MigrationFile {
                path: self.migrations_dir.join(&file_name),
                file_name,
            };
            let parsed = self.load(&migration)?;
            log::debug!("reverting {}", migration.file_name);

            self.db
                .execute_transactional(&parsed.down)
                .await
                .map_err(|source| RunnerError::MigrationFailed {
                    file: migration.file_name.clone(),
                    source,
                })?;
            let removed = self.ledger.unrecord(&migration.file_name).await?;
            if removed == 0 {
                log::warn!("{} was not recorded in the ledger", migration.file_name);
            }
            summary.executed.push(migration.file_name);
        }

        Ok(summary)
    }

    /// Every file in the store, lexically ascending, with its applied flag
    ///
    /// Read-only: a fresh database without a ledger table reads as an
    /// empty applied set and nothing is created.
    pub async fn status(&self) -> RunnerResult<Vec<StatusEntry>> {
        let applied = self.ledger.list_applied_if_exists().await?;
        let entries = discover(&self.migrations_dir)?
            .into_iter()
            .map(|m| StatusEntry {
                applied: applied.contains(&m.file_name),
                file_name: m.file_name,
            })
            .collect();
        Ok(entries)
    }

    fn load(&self, migration: &MigrationFile) -> RunnerResult<ParsedMigration> {
        let text = std::fs::read_to_string(&migration.path).map_err(|source| {
            RunnerError::UnreadableMigration {
                file: migration.file_name.clone(),
                source,
            }
        })?;
        parse(&text).map_err(|source| RunnerError::UnparsableMigration {
            file: migration.file_name.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
