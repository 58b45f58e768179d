//! Import staged migration records into Strapi.

use anyhow::Result;

use super::{ImportFailure, ImportSummary};
use crate::config::StrapiConfig;
use crate::domain::BlogRecord;
use crate::output::{JsonOutput, OutputContext};
use crate::storage::MigrationStore;
use crate::strapi::StrapiClient;

pub fn run(json: bool, quiet: bool) -> Result<()> {
    let ctx = OutputContext::new(quiet, json);
    let store = MigrationStore::from_env();
    let records = store.load_records()?;

    let _ = ctx.print_info(format!("Found {} entries to import\n", records.len()));

    let client = StrapiClient::new(&StrapiConfig::from_env());
    let summary = push_records(&client, &records, &ctx);

    if json {
        let output = JsonOutput::success(&summary, "import");
        println!("{}", output.to_json_string()?);
    } else {
        print_summary(&ctx, &summary);
    }

    Ok(())
}

/// Push records one by one, tallying failures instead of aborting. A
/// single rejected entry must never block the rest of a migration.
pub fn push_records(
    client: &StrapiClient,
    records: &[BlogRecord],
    ctx: &OutputContext,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for record in records {
        match client.create_blog(record) {
            Ok(()) => {
                let _ = ctx.print_info(format!("✓ Imported: {}", record.name));
                summary.succeeded += 1;
            }
            Err(error) => {
                let _ = ctx.print_warning(format!("failed to import {}: {}", record.name, error));
                summary.failed += 1;
                summary.failures.push(ImportFailure {
                    name: record.name.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    summary
}

/// Human-readable closing summary, matching the long-standing script output.
pub fn print_summary(ctx: &OutputContext, summary: &ImportSummary) {
    let _ = ctx.print_data("\nImport completed:");
    let _ = ctx.print_data(format!("  ✓ Success: {}", summary.succeeded));
    let _ = ctx.print_data(format!("  ✗ Errors: {}", summary.failed));
}
