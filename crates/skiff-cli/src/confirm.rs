//! Confirmation provider for destructive commands
//!
//! The reset command asks through this trait instead of reading the
//! terminal directly, so tests can script an answer.

use anyhow::{Context, Result};
use std::io::Write;

/// Source of interactive confirmation answers
pub trait Confirmation {
    /// Show the prompt and return the user's answer, without the trailing
    /// newline
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Reads the answer from stdin
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn ask(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout()
            .flush()
            .context("Failed to flush stdout")?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
pub struct ScriptedConfirmation {
    pub answer: String,
}

#[cfg(test)]
impl Confirmation for ScriptedConfirmation {
    fn ask(&self, _prompt: &str) -> Result<String> {
        Ok(self.answer.clone())
    }
}
