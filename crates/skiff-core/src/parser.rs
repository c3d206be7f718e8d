//! Section parser for goose-tagged migration files
//!
//! A migration file carries two blocks of raw SQL separated by marker
//! comments. The markers are matched case-sensitively on the
//! whitespace-trimmed line, by leading prefix, which mirrors the goose
//! convention this format is borrowed from.

use crate::error::{CoreError, CoreResult};

const MARKER_UP: &str = "-- +goose Up";
const MARKER_DOWN: &str = "-- +goose Down";
const MARKER_STATEMENT_BEGIN: &str = "-- +goose StatementBegin";
const MARKER_STATEMENT_END: &str = "-- +goose StatementEnd";

/// The up and down SQL blocks of a single migration file
///
/// Each block is the newline-joined text of its section's lines, verbatim,
/// ready to execute as a batch of SQL statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMigration {
    pub up: String,
    pub down: String,
}

#[derive(Clone, Copy)]
enum Section {
    None,
    Up,
    Down,
}

/// Split migration file text into its up and down SQL blocks
///
/// `StatementBegin`/`StatementEnd` markers are recognized and discarded.
/// Lines inside a section are preserved exactly, including blank lines.
/// A non-blank line before the first Up/Down marker is an error; blank
/// lines there are discarded.
pub fn parse(text: &str) -> CoreResult<ParsedMigration> {
    let mut up: Vec<&str> = Vec::new();
    let mut down: Vec<&str> = Vec::new();
    let mut section = Section::None;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with(MARKER_STATEMENT_BEGIN) || trimmed.starts_with(MARKER_STATEMENT_END)
        {
            continue;
        } else if trimmed.starts_with(MARKER_DOWN) {
            section = Section::Down;
        } else if trimmed.starts_with(MARKER_UP) {
            section = Section::Up;
        } else {
            match section {
                Section::Up => up.push(line),
                Section::Down => down.push(line),
                Section::None => {
                    if !trimmed.is_empty() {
                        return Err(CoreError::ContentBeforeMarker {
                            line_number: idx + 1,
                        });
                    }
                }
            }
        }
    }

    Ok(ParsedMigration {
        up: up.join("\n"),
        down: down.join("\n"),
    })
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
