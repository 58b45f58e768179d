//! Property-based tests for markdown rendering invariants
//!
//! Generated trees cover every node kind, unknown tags, arbitrary mark
//! combinations, and missing optional fields, verifying that rendering is
//! total and deterministic for shapes example-based tests would miss.

use super::to_markdown;
use crate::richtext::node::{
    DocumentNode, LinkSys, Mark, MarkKind, NodeData, NodeKind, ResourceLink,
};
use proptest::prelude::*;

fn mark_kind_strategy() -> impl Strategy<Value = MarkKind> {
    prop_oneof![
        Just(MarkKind::Bold),
        Just(MarkKind::Italic),
        Just(MarkKind::Underline),
        Just(MarkKind::Code),
        "[a-z]{1,10}".prop_map(MarkKind::Other),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = DocumentNode> {
    prop_oneof![
        // Text nodes with arbitrary values and mark sets (duplicates allowed)
        (
            "[ -~]{0,20}",
            prop::collection::vec(mark_kind_strategy(), 0..5)
        )
            .prop_map(|(value, kinds)| DocumentNode {
                kind: NodeKind::Text,
                value,
                marks: kinds.into_iter().map(Mark::new).collect(),
                ..Default::default()
            }),
        Just(DocumentNode::new(NodeKind::HorizontalRule)),
        "[A-Za-z0-9]{0,8}".prop_map(|id| DocumentNode {
            kind: NodeKind::EmbeddedAsset,
            data: NodeData {
                uri: None,
                target: if id.is_empty() {
                    None
                } else {
                    Some(ResourceLink {
                        sys: LinkSys { id },
                    })
                },
            },
            ..Default::default()
        }),
    ]
}

fn branch_kind_strategy() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Heading1),
        Just(NodeKind::Heading2),
        Just(NodeKind::Heading3),
        Just(NodeKind::Paragraph),
        Just(NodeKind::UnorderedList),
        Just(NodeKind::OrderedList),
        Just(NodeKind::ListItem),
        Just(NodeKind::Blockquote),
        Just(NodeKind::Hyperlink),
        "[a-z-]{1,16}".prop_map(NodeKind::Other),
    ]
}

fn node_strategy() -> impl Strategy<Value = DocumentNode> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        (
            branch_kind_strategy(),
            prop::collection::vec(inner, 0..4),
            prop::option::of("[ -~]{0,20}"),
        )
            .prop_map(|(kind, content, uri)| DocumentNode {
                kind,
                content,
                data: NodeData { uri, target: None },
                ..Default::default()
            })
    })
}

fn tree_strategy() -> impl Strategy<Value = DocumentNode> {
    prop::collection::vec(node_strategy(), 0..6)
        .prop_map(|content| DocumentNode::with_children(NodeKind::Document, content))
}

proptest! {
    // Rendering is total: no generated tree panics, and the result is trimmed.
    #[test]
    fn prop_rendering_is_total_and_trimmed(tree in tree_strategy()) {
        let rendered = to_markdown(&tree);
        prop_assert_eq!(rendered.trim(), rendered.as_str());
    }

    // Same tree, same output.
    #[test]
    fn prop_rendering_is_deterministic(tree in tree_strategy()) {
        prop_assert_eq!(to_markdown(&tree), to_markdown(&tree));
    }

    // Mark output depends on the mark set, never on mark order.
    #[test]
    fn prop_mark_order_is_irrelevant(
        value in "[ -~]{0,20}",
        kinds in prop::collection::vec(mark_kind_strategy(), 0..5)
    ) {
        let forward = DocumentNode {
            kind: NodeKind::Text,
            value: value.clone(),
            marks: kinds.iter().cloned().map(Mark::new).collect(),
            ..Default::default()
        };
        let mut reversed_kinds = kinds;
        reversed_kinds.reverse();
        let reversed = DocumentNode {
            kind: NodeKind::Text,
            value,
            marks: reversed_kinds.into_iter().map(Mark::new).collect(),
            ..Default::default()
        };

        let wrap = |node| DocumentNode::with_children(NodeKind::Document, vec![node]);
        prop_assert_eq!(to_markdown(&wrap(forward)), to_markdown(&wrap(reversed)));
    }

    // Collection never panics either, and resolution failures keep entries.
    #[test]
    fn prop_collection_is_total(tree in tree_strategy()) {
        let unresolved = crate::richtext::collect_assets(&tree);
        let resolved = crate::richtext::collect_assets_with(&tree, |_| None);
        prop_assert_eq!(unresolved, resolved);
    }
}
