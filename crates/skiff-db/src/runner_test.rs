use super::*;
use crate::sqlite::SqliteBackend;
use std::path::Path;

const INIT: &str = "\
-- +goose Up
-- +goose StatementBegin
CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT);
-- +goose StatementEnd

-- +goose Down
-- +goose StatementBegin
DROP TABLE t;
-- +goose StatementEnd
";

const ADDCOL: &str = "\
-- +goose Up
ALTER TABLE t ADD COLUMN email TEXT;

-- +goose Down
ALTER TABLE t DROP COLUMN email;
";

fn write_migration(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn sample_store(dir: &Path) {
    write_migration(dir, "20240101000000-init.sql", INIT);
    write_migration(dir, "20240102000000-addcol.sql", ADDCOL);
}

fn runner(dir: &Path) -> (Arc<SqliteBackend>, Runner) {
    let db = Arc::new(SqliteBackend::in_memory().unwrap());
    let runner = Runner::new(db.clone(), dir.to_path_buf());
    (db, runner)
}

#[tokio::test]
async fn test_run_up_applies_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (db, runner) = runner(dir.path());

    let summary = runner.run_up().await.unwrap();
    assert_eq!(
        summary.executed,
        vec!["20240101000000-init.sql", "20240102000000-addcol.sql"]
    );

    assert!(db.relation_exists("t").await.unwrap());
    assert_eq!(
        runner.ledger().list_applied().await.unwrap(),
        vec!["20240101000000-init.sql", "20240102000000-addcol.sql"]
    );
}

#[tokio::test]
async fn test_run_up_twice_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (_db, runner) = runner(dir.path());

    runner.run_up().await.unwrap();
    let second = runner.run_up().await.unwrap();
    assert!(second.is_empty());
}

#[tokio::test]
async fn test_run_up_with_empty_store_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let (_db, runner) = runner(dir.path());

    let summary = runner.run_up().await.unwrap();
    assert!(summary.is_empty());
}

#[tokio::test]
async fn test_run_down_one_reverts_most_recent_only() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (_db, runner) = runner(dir.path());
    runner.run_up().await.unwrap();

    let summary = runner.run_down(RollbackStep::Count(1)).await.unwrap();
    assert_eq!(summary.executed, vec!["20240102000000-addcol.sql"]);
    assert_eq!(
        runner.ledger().list_applied().await.unwrap(),
        vec!["20240101000000-init.sql"]
    );
}

#[tokio::test]
async fn test_down_then_up_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (_db, runner) = runner(dir.path());
    runner.run_up().await.unwrap();
    let before = runner.ledger().list_applied().await.unwrap();

    runner.run_down(RollbackStep::Count(1)).await.unwrap();
    runner.run_up().await.unwrap();

    assert_eq!(runner.ledger().list_applied().await.unwrap(), before);
}

#[tokio::test]
async fn test_run_down_all_then_up_reproduces_original_order() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (db, runner) = runner(dir.path());
    runner.run_up().await.unwrap();

    let reverted = runner.run_down(RollbackStep::All).await.unwrap();
    assert_eq!(
        reverted.executed,
        vec!["20240102000000-addcol.sql", "20240101000000-init.sql"]
    );
    assert!(!db.relation_exists("t").await.unwrap());
    assert!(runner.ledger().list_applied().await.unwrap().is_empty());

    runner.run_up().await.unwrap();
    assert_eq!(
        runner.ledger().list_applied().await.unwrap(),
        vec!["20240101000000-init.sql", "20240102000000-addcol.sql"]
    );
}

#[tokio::test]
async fn test_run_down_count_larger_than_applied() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (_db, runner) = runner(dir.path());
    runner.run_up().await.unwrap();

    let summary = runner.run_down(RollbackStep::Count(10)).await.unwrap();
    assert_eq!(summary.executed.len(), 2);
}

#[tokio::test]
async fn test_run_down_on_fresh_database_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (db, runner) = runner(dir.path());

    let summary = runner.run_down(RollbackStep::All).await.unwrap();
    assert!(summary.is_empty());
    // Nothing to rollback must not create the ledger table
    assert!(!db.relation_exists(crate::LEDGER_TABLE).await.unwrap());
}

#[tokio::test]
async fn test_failing_migration_halts_with_partial_progress() {
    let dir = tempfile::tempdir().unwrap();
    write_migration(dir.path(), "20240101000000-init.sql", INIT);
    write_migration(
        dir.path(),
        "20240102000000-broken.sql",
        "-- +goose Up\nTHIS IS NOT SQL;\n-- +goose Down\nSELECT 1;\n",
    );
    let (db, runner) = runner(dir.path());

    let err = runner.run_up().await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("20240102000000-broken.sql"));
    assert!(message.contains("THIS IS NOT SQL"));

    // init applied and recorded, broken neither
    assert!(db.relation_exists("t").await.unwrap());
    assert_eq!(
        runner.ledger().list_applied().await.unwrap(),
        vec!["20240101000000-init.sql"]
    );
}

#[tokio::test]
async fn test_rerun_after_failure_resumes_at_failed_file() {
    let dir = tempfile::tempdir().unwrap();
    write_migration(dir.path(), "20240101000000-init.sql", INIT);
    let broken = dir.path().join("20240102000000-broken.sql");
    std::fs::write(
        &broken,
        "-- +goose Up\nTHIS IS NOT SQL;\n-- +goose Down\nSELECT 1;\n",
    )
    .unwrap();
    let (_db, runner) = runner(dir.path());

    assert!(runner.run_up().await.is_err());

    // Fix the file; the next run picks up only the failed migration
    std::fs::write(
        &broken,
        "-- +goose Up\nCREATE TABLE fixed (id INTEGER);\n-- +goose Down\nDROP TABLE fixed;\n",
    )
    .unwrap();
    let summary = runner.run_up().await.unwrap();
    assert_eq!(summary.executed, vec!["20240102000000-broken.sql"]);
}

#[tokio::test]
async fn test_run_down_fails_if_file_missing_from_store() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (_db, runner) = runner(dir.path());
    runner.run_up().await.unwrap();

    std::fs::remove_file(dir.path().join("20240102000000-addcol.sql")).unwrap();

    let err = runner.run_down(RollbackStep::Count(1)).await.unwrap_err();
    assert!(err.to_string().contains("20240102000000-addcol.sql"));
    // The ledger is untouched by the failed rollback
    assert_eq!(runner.ledger().list_applied().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_status_reflects_ledger_membership() {
    let dir = tempfile::tempdir().unwrap();
    sample_store(dir.path());
    let (db, runner) = runner(dir.path());

    // Fresh database: everything pending, no writes performed
    let entries = runner.status().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| !e.applied));
    assert!(!db.relation_exists(crate::LEDGER_TABLE).await.unwrap());

    runner.run_up().await.unwrap();
    let entries = runner.status().await.unwrap();
    assert!(entries.iter().all(|e| e.applied));

    runner.run_down(RollbackStep::Count(1)).await.unwrap();
    let entries = runner.status().await.unwrap();
    assert_eq!(
        entries
            .iter()
            .map(|e| (e.file_name.as_str(), e.applied))
            .collect::<Vec<_>>(),
        vec![
            ("20240101000000-init.sql", true),
            ("20240102000000-addcol.sql", false)
        ]
    );
}

#[tokio::test]
async fn test_status_on_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let (_db, runner) = runner(dir.path());
    assert!(runner.status().await.unwrap().is_empty());
}
