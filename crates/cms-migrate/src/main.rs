//! Contentful → Strapi Migration CLI
//!
//! Fetches rich-text blog content from a Contentful space, converts it to
//! Markdown, and imports it into a Strapi instance. Designed for
//! deterministic, machine-friendly outputs and unattended runs.
//!
//! # Features
//!
//! - Rich-text to Markdown conversion with stable mark precedence
//! - Embedded-asset manifest extraction for follow-up media migration
//! - Staged migration file for review between export and import
//! - CSV import path for spreadsheet-shaped exports

use anyhow::Result;
use clap::Parser;
use cms_migrate::cli::{Cli, Commands};
use cms_migrate::commands::{self, check::CheckOptions};
use cms_migrate::output::ExitCode;
use cms_migrate::strapi::StrapiError;

/// Helper to determine exit code from error message
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    // Check root cause for IO errors
    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return match io_error.kind() {
            std::io::ErrorKind::NotFound => ExitCode::NotFound,
            _ => ExitCode::ExternalError,
        };
    }

    // Typed client errors map directly
    if let Some(strapi_error) = error.downcast_ref::<StrapiError>() {
        return match strapi_error {
            StrapiError::Api { .. } | StrapiError::Malformed(_) => ExitCode::ExternalError,
            StrapiError::Unreachable { .. } => ExitCode::ExternalError,
        };
    }

    // Check error message patterns
    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("not found") {
        ExitCode::NotFound
    } else if error_msg.contains("is not set") || error_msg.contains("invalid") {
        ExitCode::InvalidArgument
    } else if error_msg.contains("cannot connect")
        || error_msg.contains("cannot reach")
        || error_msg.contains("failed to reach")
        || error_msg.contains("rejected the request")
    {
        ExitCode::ExternalError
    } else {
        ExitCode::GenericError
    }
}

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.command {
        Commands::Migrate { content_type, json } => commands::migrate::run(content_type, json, quiet),
        Commands::Import { json } => commands::import::run(json, quiet),
        Commands::ImportCsv {
            file,
            dry_run,
            json,
        } => commands::import_csv::run(file, dry_run, json, quiet),
        Commands::Check {
            id,
            slug,
            count,
            export,
            json,
        } => commands::check::run(
            CheckOptions {
                id,
                slug,
                count,
                export,
                json,
            },
            quiet,
        ),
        Commands::Preview { file, assets, json } => commands::preview::run(file, assets, json, quiet),
        Commands::Schema => {
            let schema = cms_migrate::schema::migration_file_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}
