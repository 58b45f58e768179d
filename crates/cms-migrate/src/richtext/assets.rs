//! Embedded-asset discovery over rich-text document trees.
//!
//! An independent traversal from markdown rendering: the collector walks
//! the same tree and reduces it to an ordered manifest of asset
//! references, optionally resolving each reference against an external
//! index supplied by the caller.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::node::{DocumentNode, NodeKind};

/// One discovered embedded-asset reference.
///
/// Constructed once per `embedded-asset-block` node during a single
/// traversal and never mutated afterwards. The optional fields stay absent
/// when the reference could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Opaque reference id from the source system.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Resolved metadata for an asset reference, as returned by a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub url: Option<String>,
    pub title: Option<String>,
    pub content_type: Option<String>,
}

/// Collect embedded-asset references in document order, unresolved.
pub fn collect_assets(document: &DocumentNode) -> Vec<AssetDescriptor> {
    collect_assets_with(document, |_| None)
}

/// Collect embedded-asset references in document order, resolving each
/// against the supplied lookup.
///
/// The returned order is pre-order discovery order regardless of nesting
/// depth. Duplicate references each produce their own descriptor. A lookup
/// returning `None` leaves the descriptor partial (id only); it is never
/// dropped and never turns into an error.
pub fn collect_assets_with<F>(document: &DocumentNode, mut resolve: F) -> Vec<AssetDescriptor>
where
    F: FnMut(&str) -> Option<ResolvedAsset>,
{
    collect_node(document, &mut resolve)
}

fn collect_node<F>(node: &DocumentNode, resolve: &mut F) -> Vec<AssetDescriptor>
where
    F: FnMut(&str) -> Option<ResolvedAsset>,
{
    let mut found = Vec::new();

    if node.kind == NodeKind::EmbeddedAsset {
        if let Some(id) = node.asset_id() {
            let mut descriptor = AssetDescriptor {
                id: id.to_string(),
                ..Default::default()
            };
            if let Some(resolved) = resolve(id) {
                descriptor.url = resolved.url;
                descriptor.title = resolved.title;
                descriptor.content_type = resolved.content_type;
            }
            found.push(descriptor);
        }
    }

    for child in &node.content {
        found.extend(collect_node(child, resolve));
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> DocumentNode {
        // A1 sits at the top level, A2 nested inside a blockquote paragraph.
        DocumentNode::with_children(
            NodeKind::Document,
            vec![
                DocumentNode::embedded_asset("A1"),
                DocumentNode::with_children(
                    NodeKind::Blockquote,
                    vec![DocumentNode::with_children(
                        NodeKind::Paragraph,
                        vec![DocumentNode::embedded_asset("A2")],
                    )],
                ),
            ],
        )
    }

    #[test]
    fn test_assets_are_discovered_in_document_order() {
        let assets = collect_assets(&sample_document());
        let ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2"]);
    }

    #[test]
    fn test_partial_resolution_keeps_unresolved_descriptors() {
        let assets = collect_assets_with(&sample_document(), |id| {
            if id == "A2" {
                Some(ResolvedAsset {
                    url: Some("https://images.example/a2.png".to_string()),
                    title: Some("A2".to_string()),
                    content_type: Some("image/png".to_string()),
                })
            } else {
                None
            }
        });

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].id, "A1");
        assert!(assets[0].url.is_none());
        assert!(assets[0].title.is_none());
        assert!(assets[0].content_type.is_none());

        assert_eq!(assets[1].id, "A2");
        assert_eq!(assets[1].url.as_deref(), Some("https://images.example/a2.png"));
        assert_eq!(assets[1].content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_duplicate_references_are_not_deduplicated() {
        let doc = DocumentNode::with_children(
            NodeKind::Document,
            vec![
                DocumentNode::embedded_asset("A1"),
                DocumentNode::embedded_asset("A1"),
            ],
        );
        let assets = collect_assets(&doc);
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn test_asset_block_without_reference_is_skipped() {
        let doc = DocumentNode::with_children(
            NodeKind::Document,
            vec![DocumentNode::new(NodeKind::EmbeddedAsset)],
        );
        assert!(collect_assets(&doc).is_empty());
    }

    #[test]
    fn test_document_without_assets_collects_nothing() {
        let doc = DocumentNode::with_children(
            NodeKind::Document,
            vec![DocumentNode::with_children(
                NodeKind::Paragraph,
                vec![DocumentNode::text("no media here")],
            )],
        );
        assert!(collect_assets(&doc).is_empty());
    }
}
