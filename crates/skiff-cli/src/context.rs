//! Runtime context for CLI commands

use anyhow::{Context, Result};
use skiff_core::Config;
use skiff_db::{Database, Runner, SqliteBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing loaded config and an open database connection
pub struct RuntimeContext {
    /// Loaded project configuration
    pub config: Config,

    /// Migration runner bound to the project's store and database
    pub runner: Runner,

    /// Resolved migrations directory
    pub migrations_dir: PathBuf,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project_root = Path::new(&args.project_dir);

        let config = Config::load_from_dir(project_root)
            .context("Failed to load project configuration")?;

        let db_path = config.database_path_absolute(project_root);
        let db: Arc<dyn Database> = Arc::new(
            SqliteBackend::new(&db_path.to_string_lossy())
                .context("Failed to open the target database")?,
        );

        log::debug!(
            "opened {} database at {}",
            db.db_type(),
            db_path.display()
        );

        let migrations_dir = config.migrations_dir_absolute(project_root);
        let runner = Runner::new(db, migrations_dir.clone());

        Ok(Self {
            config,
            runner,
            migrations_dir,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
