//! Migration file discovery, naming, and the scaffold template

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// File extension for migration files
pub const MIGRATION_EXTENSION: &str = "sql";

/// Scaffold written by the create command: empty, correctly tagged sections
pub const TEMPLATE: &str = "\
-- +goose Up
-- +goose StatementBegin
-- +goose StatementEnd

-- +goose Down
-- +goose StatementBegin
-- +goose StatementEnd
";

/// A discovered migration file
///
/// Ordering is by file name, which carries the timestamp prefix, so sorting
/// a batch of these yields creation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MigrationFile {
    /// File name including the .sql extension
    pub file_name: String,

    /// Full path to the file on disk
    pub path: PathBuf,
}

impl MigrationFile {
    /// Migration name without the .sql extension, for display
    pub fn display_name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }
}

/// Discover all migration files in a directory, lexically ascending
///
/// Non-.sql entries are ignored. A missing or unreadable directory is an
/// error; callers that want "empty store" semantics must create the
/// directory first.
pub fn discover(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::MigrationsDirUnreadable {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut migrations = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::MigrationsDirUnreadable {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }
        if path
            .extension()
            .is_some_and(|ext| ext == MIGRATION_EXTENSION)
        {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                migrations.push(MigrationFile {
                    file_name: name.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    migrations.sort();
    log::debug!(
        "discovered {} migration files in {}",
        migrations.len(),
        dir.display()
    );
    Ok(migrations)
}

/// Build a migration file name from a label and a creation time
///
/// Format: `<YYYYMMDDHHMMSS>-<label>.sql`, second resolution.
pub fn file_name_for(label: &str, created_at: DateTime<Local>) -> String {
    format!(
        "{}-{}.{}",
        created_at.format("%Y%m%d%H%M%S"),
        label,
        MIGRATION_EXTENSION
    )
}

/// Validate a user-supplied migration label
///
/// Rejects labels that could cause path traversal or confusing file names.
pub fn validate_label(label: &str) -> CoreResult<()> {
    if label.is_empty() {
        return Err(CoreError::InvalidLabel {
            label: label.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if label.contains('/')
        || label.contains('\\')
        || label.contains("..")
        || label.starts_with('.')
        || label.starts_with('-')
    {
        return Err(CoreError::InvalidLabel {
            label: label.to_string(),
            reason: "must not contain '/', '\\', '..', or start with '.' or '-'".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
