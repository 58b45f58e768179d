//! Export entries from Contentful and stage them for import.

use anyhow::Result;
use serde_json::json;

use crate::config::ContentfulConfig;
use crate::contentful::{AssetIndex, ContentfulClient, Entry};
use crate::domain::{BlogRecord, PublishStatus};
use crate::output::{JsonOutput, OutputContext};
use crate::richtext::{collect_assets_with, to_markdown, DocumentNode};
use crate::storage::MigrationStore;

pub fn run(content_type: Option<String>, json: bool, quiet: bool) -> Result<()> {
    let ctx = OutputContext::new(quiet, json);
    let config = ContentfulConfig::from_env()?;
    let content_type = content_type.unwrap_or_else(|| config.content_type.clone());
    let client = ContentfulClient::new(&config);

    let _ = ctx.print_info("Fetching entries from Contentful...");
    let (entries, assets) = client.fetch_entries(&content_type)?;
    let _ = ctx.print_info(format!("Found {} blog entries\n", entries.len()));

    let mut records = Vec::with_capacity(entries.len());
    for entry in &entries {
        let record = build_record(entry, &assets);
        let _ = ctx.print_info(format!("✓ Processed: {}", record.name));
        records.push(record);
    }

    let store = MigrationStore::from_env();
    let path = store.save_records(&records)?;

    if json {
        let output = JsonOutput::success(
            json!({
                "entries": records.len(),
                "resolved_assets": assets.len(),
                "path": path,
            }),
            "migrate",
        );
        println!("{}", output.to_json_string()?);
    } else {
        let _ = ctx.print_success(format!("\n✓ Migration data saved to: {}", path.display()));
        let _ = ctx.print_info("\nNext steps:");
        let _ = ctx.print_info(format!("1. Review the migration data in {}", path.display()));
        let _ = ctx.print_info("2. Run: cms-migrate import to push the entries into Strapi");
    }

    Ok(())
}

/// Map one source entry onto a migration record: convert the rich text,
/// collect its asset manifest, and fill the metadata fields with the same
/// fallbacks the original export used.
pub fn build_record(entry: &Entry, assets: &AssetIndex) -> BlogRecord {
    let fields = &entry.fields;
    let sys = &entry.sys;

    let tree: Option<DocumentNode> = fields
        .blog_text
        .as_ref()
        .and_then(|raw| serde_json::from_value(raw.clone()).ok());

    let blog_text = tree.as_ref().map(to_markdown).unwrap_or_default();
    let embedded_assets = tree
        .as_ref()
        .map(|doc| collect_assets_with(doc, |id| assets.resolve(id)))
        .unwrap_or_default();

    let name = fields
        .name
        .clone()
        .or_else(|| fields.title.clone())
        .unwrap_or_else(|| "Untitled".to_string());

    let status = if sys.published_at.is_some() {
        PublishStatus::Published
    } else {
        PublishStatus::Draft
    };

    BlogRecord {
        name,
        slug: fields.slug.clone().unwrap_or_else(|| sys.id.clone()),
        blog_text,
        contentful_rich_text: fields.blog_text.clone(),
        tags: fields.tags.clone(),
        status,
        content_type: fields
            .content_type
            .clone()
            .or_else(|| sys.content_type_id().map(str::to_string))
            .unwrap_or_else(|| "Blog".to_string()),
        author: fields
            .created_by
            .clone()
            .or_else(|| sys.created_by_id().map(str::to_string)),
        last_updated_by: fields
            .last_updated_by
            .clone()
            .or_else(|| sys.updated_by_id().map(str::to_string)),
        published_date: sys.published_at.or(sys.created_at),
        embedded_assets,
        contentful_id: Some(sys.id.clone()),
        created_at: sys.created_at,
        updated_at: sys.updated_at,
    }
}
