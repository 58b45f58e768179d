//! Import blog entries from a CSV export.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use super::import;
use crate::config::StrapiConfig;
use crate::csvfile::CsvTable;
use crate::domain::BlogRecord;
use crate::errors;
use crate::output::{JsonOutput, OutputContext};
use crate::storage::MigrationStore;
use crate::strapi::StrapiClient;

pub fn run(file: Option<PathBuf>, dry_run: bool, json: bool, quiet: bool) -> Result<()> {
    let ctx = OutputContext::new(quiet, json);
    let store = MigrationStore::from_env();
    let csv_path = file.unwrap_or_else(|| store.csv_input_path());

    if !csv_path.exists() {
        return Err(anyhow::Error::new(errors::csv_file_missing(&csv_path)));
    }

    let contents = fs::read_to_string(&csv_path)?;
    let table = CsvTable::parse(&contents);
    let records: Vec<BlogRecord> = table.rows().map(|row| BlogRecord::from_csv_row(&row)).collect();

    let _ = ctx.print_info(format!("Found {} entries in CSV\n", records.len()));

    let snapshot = store.save_csv_snapshot(&records)?;
    let _ = ctx.print_info(format!("✓ Parsed data saved to: {}\n", snapshot.display()));

    if dry_run {
        if json {
            let output = JsonOutput::success(
                serde_json::json!({
                    "entries": records.len(),
                    "snapshot": snapshot,
                    "imported": false,
                }),
                "import-csv",
            );
            println!("{}", output.to_json_string()?);
        } else {
            let _ = ctx.print_success("Dry run: skipping the Strapi import");
        }
        return Ok(());
    }

    let client = StrapiClient::new(&StrapiConfig::from_env());

    let _ = ctx.print_info("Testing connection to Strapi...");
    if client.ping().is_err() {
        return Err(anyhow::Error::new(errors::strapi_unreachable(
            client.base_url(),
        )));
    }
    let _ = ctx.print_info("✓ Connection successful\n");

    let summary = import::push_records(&client, &records, &ctx);

    if json {
        let output = JsonOutput::success(&summary, "import-csv");
        println!("{}", output.to_json_string()?);
    } else {
        import::print_summary(&ctx, &summary);
    }

    Ok(())
}
