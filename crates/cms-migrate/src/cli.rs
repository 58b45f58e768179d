//! Command-line interface definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Contentful → Strapi migration toolkit
///
/// Fetches rich-text blog entries from a Contentful space, converts them
/// to Markdown, and imports them into a Strapi instance. Designed for
/// deterministic, machine-friendly outputs so runs can be scripted.
///
/// Exit Codes:
///   0  - Command succeeded
///   1  - Generic error occurred
///   2  - Invalid arguments or usage error
///   3  - Resource not found (entry, data file, etc.)
///  10  - External dependency failed (Contentful, Strapi, file system)
#[derive(Parser)]
#[command(name = "cms-migrate")]
#[command(about = "Contentful to Strapi content migration toolkit", long_about = None)]
pub struct Cli {
    /// Suppress non-essential output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch entries from Contentful, convert them, and stage the migration file
    ///
    /// Requires CONTENTFUL_SPACE_ID and CONTENTFUL_ACCESS_TOKEN (a .env file
    /// in the working directory is honored). The staged file lands in the
    /// data directory and is reviewed before running `import`.
    Migrate {
        /// Contentful content type to export (default from CONTENTFUL_CONTENT_TYPE or "blog")
        #[arg(long)]
        content_type: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import the staged migration file into Strapi
    Import {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import blog entries from a CSV export
    ImportCsv {
        /// Path to the CSV file (defaults to <data-dir>/blogs.csv)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Parse and snapshot only; skip the Strapi import
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect blog entries in Strapi
    Check {
        /// Show a specific blog by numeric ID
        #[arg(long)]
        id: Option<u64>,

        /// Show a specific blog by slug
        #[arg(long)]
        slug: Option<String>,

        /// Show only the number of blogs
        #[arg(long)]
        count: bool,

        /// Export the fetched blogs to <data-dir>/blogs-export.json
        #[arg(long)]
        export: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a local rich-text JSON document and print the result
    ///
    /// Accepts either a bare rich-text document or an object carrying one
    /// under a blogText field. Useful for checking conversions without
    /// touching either content store.
    Preview {
        /// Path to the JSON file to convert
        file: PathBuf,

        /// Print the embedded-asset manifest instead of the markdown body
        #[arg(long)]
        assets: bool,

        /// Output as JSON (markdown body plus asset manifest)
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of the staged migration file
    Schema,
}
