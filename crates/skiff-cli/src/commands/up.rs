//! Up command implementation

use anyhow::Result;
use skiff_db::RunSummary;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the up command
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "applying pending migrations from {}",
        ctx.migrations_dir.display()
    ));

    let summary = ctx.runner.run_up().await?;
    report(&summary);
    Ok(())
}

/// Print the result of an up run
pub(crate) fn report(summary: &RunSummary) {
    if summary.is_empty() {
        println!("Nothing to migrate.");
        return;
    }
    for file_name in &summary.executed {
        println!("Executed migration: {}", file_name);
    }
}
