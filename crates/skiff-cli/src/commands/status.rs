//! Status command implementation

use anyhow::Result;
use skiff_db::StatusEntry;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

const MIGRATE_Y: &str = "✓";
const MIGRATE_N: &str = "✗";

/// Execute the status command
///
/// Read-only: reports every migration file with its applied flag and never
/// writes to the database.
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let entries = ctx.runner.status().await?;

    if entries.is_empty() {
        println!("No migrations found.");
        return Ok(());
    }

    print!("{}", render_table(&entries));
    Ok(())
}

/// Render the status table
fn render_table(entries: &[StatusEntry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| display_name(&e.file_name).len())
        .max()
        .unwrap_or(0);
    let dash_line = "-".repeat(name_width + 12);

    let mut out = String::new();
    out.push_str(&format!("{}\n", dash_line));
    out.push_str(&format!(
        "{:<width$} | {:<10}\n",
        "Migration Name",
        "Migrated",
        width = name_width
    ));
    out.push_str(&format!("{}\n", dash_line));

    for entry in entries {
        let flag = if entry.applied { MIGRATE_Y } else { MIGRATE_N };
        out.push_str(&format!(
            "{:<width$} | {:<10}\n",
            display_name(&entry.file_name),
            flag,
            width = name_width
        ));
    }
    out
}

/// Migration name without the .sql extension
fn display_name(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}
