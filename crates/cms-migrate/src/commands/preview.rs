//! Convert a local rich-text JSON document and print the result.
//!
//! Works entirely offline, so a conversion can be eyeballed before any
//! network migration runs.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::output::{JsonOutput, OutputContext};
use crate::richtext::{collect_assets, to_markdown, DocumentNode};

pub fn run(file: PathBuf, assets_only: bool, json: bool, quiet: bool) -> Result<()> {
    let ctx = OutputContext::new(quiet, json);

    let contents = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let raw: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", file.display()))?;

    let document = extract_document(&raw).with_context(|| {
        format!(
            "{} holds neither a rich-text document nor a blogText field",
            file.display()
        )
    })?;

    let markdown = to_markdown(&document);
    let manifest = collect_assets(&document);

    if json {
        let output = JsonOutput::success(
            serde_json::json!({
                "markdown": markdown,
                "assets": manifest,
            }),
            "preview",
        );
        println!("{}", output.to_json_string()?);
        return Ok(());
    }

    if assets_only {
        if manifest.is_empty() {
            let _ = ctx.print_data("No embedded assets found");
        } else {
            for asset in &manifest {
                let _ = ctx.print_data(format!(
                    "{} | {} | {}",
                    asset.id,
                    asset.url.as_deref().unwrap_or("-"),
                    asset.content_type.as_deref().unwrap_or("-"),
                ));
            }
        }
        return Ok(());
    }

    let _ = ctx.print_info("Converted Markdown:\n");
    let _ = ctx.print_data("---");
    let _ = ctx.print_data(&markdown);
    let _ = ctx.print_data("---");
    if !manifest.is_empty() {
        let _ = ctx.print_info(format!("\n{} embedded asset(s) referenced", manifest.len()));
    }

    Ok(())
}

/// Pull the rich-text tree out of whatever shape the file holds: a bare
/// document, an entry's fields, or a staged migration record.
fn extract_document(raw: &Value) -> Option<DocumentNode> {
    let candidate = if raw.get("nodeType").is_some() {
        raw
    } else if let Some(body) = raw.get("blogText") {
        body
    } else if let Some(body) = raw.get("contentfulRichText") {
        body
    } else if let Some(body) = raw.pointer("/fields/blogText") {
        body
    } else {
        return None;
    };

    serde_json::from_value(candidate.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::NodeKind;

    #[test]
    fn test_extract_bare_document() {
        let raw: Value =
            serde_json::from_str(r#"{"nodeType": "document", "content": []}"#).unwrap();
        let doc = extract_document(&raw).unwrap();
        assert_eq!(doc.kind, NodeKind::Document);
    }

    #[test]
    fn test_extract_from_blog_text_field() {
        let raw: Value = serde_json::from_str(
            r#"{"name": "Post", "blogText": {"nodeType": "document", "content": []}}"#,
        )
        .unwrap();
        assert!(extract_document(&raw).is_some());
    }

    #[test]
    fn test_extract_from_entry_fields() {
        let raw: Value = serde_json::from_str(
            r#"{"fields": {"blogText": {"nodeType": "document", "content": []}}}"#,
        )
        .unwrap();
        assert!(extract_document(&raw).is_some());
    }

    #[test]
    fn test_extract_rejects_unrelated_json() {
        let raw: Value = serde_json::from_str(r#"{"name": "no body here"}"#).unwrap();
        assert!(extract_document(&raw).is_none());
    }
}
