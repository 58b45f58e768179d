//! Markdown rendering for rich-text document trees.
//!
//! A single depth-first, pre-order pass over the tree. Each node kind has
//! its own emission rule; unrecognized kinds fall through to rendering
//! their children unwrapped so that upstream schema additions never drop
//! content or fail a migration.

use super::node::{DocumentNode, MarkKind, NodeKind};

/// Render a document tree to Markdown.
///
/// Total and deterministic: any tree shape produces a string, including
/// trees with unknown node kinds or missing optional fields. The result is
/// trimmed of leading and trailing whitespace.
pub fn to_markdown(document: &DocumentNode) -> String {
    render_node(document).trim().to_string()
}

fn render_node(node: &DocumentNode) -> String {
    match &node.kind {
        NodeKind::Document => render_children(node),
        NodeKind::Heading1 => format!("# {}\n\n", render_children(node)),
        NodeKind::Heading2 => format!("## {}\n\n", render_children(node)),
        NodeKind::Heading3 => format!("### {}\n\n", render_children(node)),
        NodeKind::Paragraph => format!("{}\n\n", render_children(node)),
        NodeKind::Text => render_text(node),
        NodeKind::Hyperlink => {
            format!("[{}]({})", render_children(node), node.link_uri())
        }
        NodeKind::UnorderedList => format!("{}\n", render_children(node)),
        NodeKind::OrderedList => {
            let mut out = String::new();
            for (position, item) in node.content.iter().enumerate() {
                out.push_str(&format!("{}. ", position + 1));
                out.push_str(&render_node(item));
            }
            out.push('\n');
            out
        }
        NodeKind::ListItem => format!("- {}\n", render_children(node)),
        NodeKind::Blockquote => {
            let mut out = String::new();
            for child in &node.content {
                out.push_str("> ");
                out.push_str(&render_node(child));
            }
            out.push('\n');
            out
        }
        NodeKind::EmbeddedAsset => match node.asset_id() {
            Some(id) => format!("[Asset: {}]\n\n", id),
            None => String::new(),
        },
        NodeKind::HorizontalRule => "---\n\n".to_string(),
        NodeKind::Other(_) => render_children(node),
    }
}

fn render_children(node: &DocumentNode) -> String {
    node.content.iter().map(render_node).collect()
}

/// Apply inline style marks to a text node's value.
///
/// Wrappers are applied innermost-first so the fixed precedence
/// bold > italic > underline > code holds no matter how the source orders
/// its marks. Duplicate marks in the input wrap once.
fn render_text(node: &DocumentNode) -> String {
    let mut text = node.value.clone();
    if node.marks.is_empty() {
        return text;
    }

    let has = |kind: MarkKind| node.marks.iter().any(|mark| mark.kind == kind);

    if has(MarkKind::Code) {
        text = format!("`{}`", text);
    }
    if has(MarkKind::Underline) {
        text = format!("<u>{}</u>", text);
    }
    if has(MarkKind::Italic) {
        text = format!("*{}*", text);
    }
    if has(MarkKind::Bold) {
        text = format!("**{}**", text);
    }
    text
}


// Include property-based tests
#[cfg(test)]
#[path = "markdown_proptests.rs"]
mod proptests;
