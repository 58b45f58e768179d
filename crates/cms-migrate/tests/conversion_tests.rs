//! End-to-end conversion tests over raw source JSON
//!
//! These tests feed wire-shaped rich text straight through deserialization,
//! markdown rendering, and asset collection, the way the migrate command
//! consumes API responses.

use cms_migrate::richtext::{collect_assets, collect_assets_with, to_markdown, ResolvedAsset};
use cms_migrate::DocumentNode;

fn parse(json: &str) -> DocumentNode {
    serde_json::from_str(json).expect("document JSON should deserialize")
}

#[test]
fn test_sample_blog_export_converts_to_markdown() {
    // Shaped like a real export: bold heading, plain paragraph.
    let doc = parse(
        r#"{
            "nodeType": "document",
            "data": {},
            "content": [
                {
                    "nodeType": "heading-1",
                    "content": [{
                        "nodeType": "text",
                        "value": "Introduction: What the Collection Offers",
                        "marks": [{"type": "bold"}]
                    }]
                },
                {
                    "nodeType": "paragraph",
                    "content": [{
                        "nodeType": "text",
                        "value": "The lobby groups these titles together so players can jump in."
                    }]
                }
            ]
        }"#,
    );

    assert_eq!(
        to_markdown(&doc),
        "# **Introduction: What the Collection Offers**\n\n\
         The lobby groups these titles together so players can jump in."
    );
}

#[test]
fn test_full_feature_document() {
    let doc = parse(
        r#"{
            "nodeType": "document",
            "content": [
                {"nodeType": "heading-2", "content": [{"nodeType": "text", "value": "Guide"}]},
                {"nodeType": "paragraph", "content": [
                    {"nodeType": "text", "value": "See "},
                    {"nodeType": "hyperlink", "data": {"uri": "https://example.com"},
                     "content": [{"nodeType": "text", "value": "the docs"}]},
                    {"nodeType": "text", "value": " for details."}
                ]},
                {"nodeType": "unordered-list", "content": [
                    {"nodeType": "list-item", "content": [{"nodeType": "text", "value": "one"}]},
                    {"nodeType": "list-item", "content": [{"nodeType": "text", "value": "two"}]}
                ]},
                {"nodeType": "hr"},
                {"nodeType": "blockquote", "content": [
                    {"nodeType": "paragraph", "content": [{"nodeType": "text", "value": "wise words"}]}
                ]},
                {"nodeType": "embedded-asset-block",
                 "data": {"target": {"sys": {"id": "A9", "type": "Link", "linkType": "Asset"}}}}
            ]
        }"#,
    );

    let markdown = to_markdown(&doc);
    assert!(markdown.starts_with("## Guide"));
    assert!(markdown.contains("[the docs](https://example.com)"));
    assert!(markdown.contains("- one\n- two"));
    assert!(markdown.contains("---"));
    assert!(markdown.contains("> wise words"));
    assert!(markdown.ends_with("[Asset: A9]"));
}

#[test]
fn test_unknown_node_kinds_render_their_children() {
    let doc = parse(
        r#"{
            "nodeType": "document",
            "content": [
                {"nodeType": "custom-widget", "content": [
                    {"nodeType": "text", "value": "hello"}
                ]},
                {"nodeType": "table", "content": [
                    {"nodeType": "table-row", "content": [
                        {"nodeType": "table-cell", "content": [
                            {"nodeType": "paragraph", "content": [
                                {"nodeType": "text", "value": "cell"}
                            ]}
                        ]}
                    ]}
                ]}
            ]
        }"#,
    );

    let markdown = to_markdown(&doc);
    assert!(markdown.contains("hello"));
    assert!(markdown.contains("cell"));
}

#[test]
fn test_assets_collected_across_nesting_depths_in_order() {
    let doc = parse(
        r#"{
            "nodeType": "document",
            "content": [
                {"nodeType": "embedded-asset-block",
                 "data": {"target": {"sys": {"id": "A1"}}}},
                {"nodeType": "blockquote", "content": [
                    {"nodeType": "paragraph", "content": [
                        {"nodeType": "embedded-asset-block",
                         "data": {"target": {"sys": {"id": "A2"}}}}
                    ]}
                ]}
            ]
        }"#,
    );

    let ids: Vec<String> = collect_assets(&doc).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["A1", "A2"]);

    // Resolution only has data for A2; A1 stays partial.
    let resolved = collect_assets_with(&doc, |id| {
        (id == "A2").then(|| ResolvedAsset {
            url: Some("https://img/a2.png".to_string()),
            title: Some("A2".to_string()),
            content_type: Some("image/png".to_string()),
        })
    });
    assert!(resolved[0].url.is_none());
    assert_eq!(resolved[1].url.as_deref(), Some("https://img/a2.png"));
}

#[test]
fn test_conversion_and_collection_are_independent_passes() {
    let doc = parse(
        r#"{
            "nodeType": "document",
            "content": [
                {"nodeType": "embedded-asset-block",
                 "data": {"target": {"sys": {"id": "A1"}}}}
            ]
        }"#,
    );

    // Neither call disturbs the other; both see the same tree.
    let before = collect_assets(&doc);
    let markdown = to_markdown(&doc);
    let after = collect_assets(&doc);

    assert_eq!(markdown, "[Asset: A1]");
    assert_eq!(before, after);
}
