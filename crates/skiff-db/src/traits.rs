//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Database abstraction trait for Skiff
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a single SQL statement, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a single SQL statement with positional text parameters
    async fn execute_params(&self, sql: &str, params: &[String]) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute multiple SQL statements inside one transaction
    ///
    /// The transaction is committed on success and rolled back on any
    /// failure, leaving the database untouched.
    async fn execute_transactional(&self, sql: &str) -> DbResult<()>;

    /// Execute a query, returning the first column of each row as text
    async fn query_strings(&self, sql: &str) -> DbResult<Vec<String>>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
