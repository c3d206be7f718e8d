//! Down command implementation

use anyhow::Result;
use skiff_db::{RollbackStep, RunSummary};

use crate::cli::{DownArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the down command
pub(crate) async fn execute(args: &DownArgs, global: &GlobalArgs) -> Result<()> {
    let step = parse_step(&args.step)?;

    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!("rolling back with step {:?}", step));

    let summary = ctx.runner.run_down(step).await?;
    report(&summary);
    Ok(())
}

/// Print the result of a down run
pub(crate) fn report(summary: &RunSummary) {
    if summary.is_empty() {
        println!("Nothing to rollback.");
        return;
    }
    for file_name in &summary.executed {
        println!("Reverted migration: {}", file_name);
    }
}

/// Parse the step argument: "all" or a positive integer
fn parse_step(step: &str) -> Result<RollbackStep> {
    if step == "all" {
        return Ok(RollbackStep::All);
    }
    match step.parse::<usize>() {
        Ok(n) if n > 0 => Ok(RollbackStep::Count(n)),
        _ => anyhow::bail!(
            "Invalid step '{}': expected a positive integer or 'all'",
            step
        ),
    }
}
