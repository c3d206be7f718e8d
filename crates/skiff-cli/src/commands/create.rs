//! Create command implementation - scaffolds a new migration file

use anyhow::{Context, Result};
use chrono::Local;
use skiff_core::{migration, Config};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::{CreateArgs, GlobalArgs};

/// Execute the create command
///
/// Does not touch the database: only the migrations directory is involved.
pub(crate) async fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    migration::validate_label(&args.name)?;

    let project_root = Path::new(&global.project_dir);
    let config =
        Config::load_from_dir(project_root).context("Failed to load project configuration")?;

    let migrations_dir = config.migrations_dir_absolute(project_root);
    std::fs::create_dir_all(&migrations_dir).with_context(|| {
        format!(
            "Failed to create migrations directory: {}",
            migrations_dir.display()
        )
    })?;

    let file_name = migration::file_name_for(&args.name, Local::now());
    let path = migrations_dir.join(&file_name);

    // create_new refuses to overwrite an existing file with the same
    // timestamp and label
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Failed to create migration file: {}", path.display()))?;
    file.write_all(migration::TEMPLATE.as_bytes())
        .with_context(|| format!("Failed to write migration file: {}", path.display()))?;

    println!("Migration file created: {}", path.display());
    Ok(())
}
