//! Contentful → Strapi Migration Toolkit Library
//!
//! This library provides the core functionality for the cms-migrate CLI.
//! It is primarily used for testing, but the rich-text converter and asset
//! collector can also be embedded in other applications.

pub mod cli;
pub mod commands;
pub mod config;
pub mod contentful;
pub mod csvfile;
pub mod domain;
pub mod errors;
pub mod output;
pub mod richtext;
pub mod schema;
pub mod storage;
pub mod strapi;

// Re-export commonly used types
pub use domain::{BlogRecord, PublishStatus};
pub use output::{ExitCode, JsonError, JsonOutput};
pub use richtext::{
    collect_assets, collect_assets_with, to_markdown, AssetDescriptor, DocumentNode, NodeKind,
};
pub use storage::MigrationStore;
