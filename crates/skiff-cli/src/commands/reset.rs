//! Reset command implementation - revert everything, then reapply

use anyhow::Result;
use skiff_db::RollbackStep;

use crate::cli::GlobalArgs;
use crate::commands::{down, up};
use crate::confirm::{Confirmation, StdinConfirmation};
use crate::context::RuntimeContext;

const CONFIRMATION_PROMPT: &str = "For safety type 'RESET' before continue: ";
const CONFIRMATION_ANSWER: &str = "RESET";

/// Execute the reset command
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    run(global, &StdinConfirmation).await
}

/// Reset with an explicit confirmation source
///
/// A mismatched answer aborts silently with no side effect; this is not an
/// error.
pub(crate) async fn run(global: &GlobalArgs, confirm: &dyn Confirmation) -> Result<()> {
    if confirm.ask(CONFIRMATION_PROMPT)? != CONFIRMATION_ANSWER {
        return Ok(());
    }

    let ctx = RuntimeContext::new(global)?;
    ctx.verbose("confirmed, rebuilding database from scratch");

    let reverted = ctx.runner.run_down(RollbackStep::All).await?;
    down::report(&reverted);

    let applied = ctx.runner.run_up().await?;
    up::report(&applied);
    Ok(())
}
