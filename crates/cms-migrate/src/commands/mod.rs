//! Command execution logic for all CLI operations.
//!
//! One submodule per subcommand:
//! - `migrate`: export from Contentful and stage the migration file
//! - `import`: push staged records into Strapi
//! - `import_csv`: parse a CSV export and push its rows
//! - `check`: inspect what the target store holds
//! - `preview`: convert a local rich-text document offline

pub mod check;
pub mod import;
pub mod import_csv;
pub mod migrate;
pub mod preview;

use serde::Serialize;

/// Outcome of pushing a batch of records into the target store.
///
/// Per-record failures are tallied, never fatal: one rejected entry must
/// not block the rest of the batch.
#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<ImportFailure>,
}

/// One record the target store rejected, with the reason.
#[derive(Debug, Serialize)]
pub struct ImportFailure {
    pub name: String,
    pub error: String,
}
