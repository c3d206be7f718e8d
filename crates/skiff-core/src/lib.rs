//! skiff-core - Core library for Skiff
//!
//! This crate provides shared types, configuration parsing, migration file
//! discovery and naming, and the section parser used by the migration
//! engine.

pub mod config;
pub mod error;
pub mod migration;
pub mod parser;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use migration::{discover, file_name_for, validate_label, MigrationFile};
pub use parser::{parse, ParsedMigration};
