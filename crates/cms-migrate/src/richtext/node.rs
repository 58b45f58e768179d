//! Rich-text document tree model.
//!
//! Mirrors the wire shape produced by the Contentful Delivery API
//! (`nodeType`, `content`, `value`, `marks`, `data`). Every field has a
//! neutral default so that no tree delivered by the source system is
//! rejected during deserialization.

use serde::{Deserialize, Serialize};

/// Semantic role of a document node.
///
/// The enumeration is closed over the node kinds this toolkit renders;
/// any other tag is preserved verbatim in the `Other` arm so that unknown
/// content survives a round trip and still renders its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Document,
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Text,
    Hyperlink,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    EmbeddedAsset,
    HorizontalRule,
    /// Unrecognized node tag, kept verbatim.
    Other(String),
}

impl NodeKind {
    /// Parse a wire tag into a node kind. Unknown tags are preserved.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "document" => NodeKind::Document,
            "heading-1" => NodeKind::Heading1,
            "heading-2" => NodeKind::Heading2,
            "heading-3" => NodeKind::Heading3,
            "paragraph" => NodeKind::Paragraph,
            "text" => NodeKind::Text,
            "hyperlink" => NodeKind::Hyperlink,
            "unordered-list" => NodeKind::UnorderedList,
            "ordered-list" => NodeKind::OrderedList,
            "list-item" => NodeKind::ListItem,
            "blockquote" => NodeKind::Blockquote,
            "embedded-asset-block" => NodeKind::EmbeddedAsset,
            "hr" => NodeKind::HorizontalRule,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The wire tag for this kind.
    pub fn as_tag(&self) -> &str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Heading1 => "heading-1",
            NodeKind::Heading2 => "heading-2",
            NodeKind::Heading3 => "heading-3",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::Hyperlink => "hyperlink",
            NodeKind::UnorderedList => "unordered-list",
            NodeKind::OrderedList => "ordered-list",
            NodeKind::ListItem => "list-item",
            NodeKind::Blockquote => "blockquote",
            NodeKind::EmbeddedAsset => "embedded-asset-block",
            NodeKind::HorizontalRule => "hr",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::from_tag(&tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

/// Inline style tag carried by a text node (wire shape `{"type": "bold"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type", default)]
    pub kind: MarkKind,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self { kind }
    }
}

/// Inline style kinds. Unknown styles are kept but never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Code,
    Other(String),
}

impl From<String> for MarkKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "underline" => MarkKind::Underline,
            "code" => MarkKind::Code,
            _ => MarkKind::Other(tag),
        }
    }
}

impl From<MarkKind> for String {
    fn from(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Bold => "bold".to_string(),
            MarkKind::Italic => "italic".to_string(),
            MarkKind::Underline => "underline".to_string(),
            MarkKind::Code => "code".to_string(),
            MarkKind::Other(tag) => tag,
        }
    }
}

impl Default for MarkKind {
    fn default() -> Self {
        MarkKind::Other(String::new())
    }
}

/// Kind-specific payload attached to a node.
///
/// Hyperlinks carry `uri`; embedded asset blocks carry a `target` link to
/// the referenced media object. Both are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ResourceLink>,
}

impl NodeData {
    pub fn is_empty(&self) -> bool {
        self.uri.is_none() && self.target.is_none()
    }
}

/// Link from a node to an externally stored resource (`data.target`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    #[serde(default)]
    pub sys: LinkSys,
}

/// System metadata of a resource link; only the id is meaningful here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSys {
    #[serde(default)]
    pub id: String,
}

/// One node of a rich-text document tree.
///
/// The tree is acyclic by construction of the source format and rooted at
/// a single `document` node. Nodes are immutable values; the converter and
/// collector only ever borrow them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "nodeType", default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, skip_serializing_if = "NodeData::is_empty")]
    pub data: NodeData,
}

impl DocumentNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a node of the given kind wrapping the given children.
    pub fn with_children(kind: NodeKind, content: Vec<DocumentNode>) -> Self {
        Self {
            kind,
            content,
            ..Default::default()
        }
    }

    /// Create a plain text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: value.into(),
            ..Default::default()
        }
    }

    /// Create a text node with inline style marks.
    pub fn styled_text(value: impl Into<String>, marks: Vec<MarkKind>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: value.into(),
            marks: marks.into_iter().map(Mark::new).collect(),
            ..Default::default()
        }
    }

    /// Create a hyperlink node around the given children.
    pub fn hyperlink(uri: impl Into<String>, content: Vec<DocumentNode>) -> Self {
        Self {
            kind: NodeKind::Hyperlink,
            content,
            data: NodeData {
                uri: Some(uri.into()),
                target: None,
            },
            ..Default::default()
        }
    }

    /// Create an embedded asset block referencing the given asset id.
    pub fn embedded_asset(id: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::EmbeddedAsset,
            data: NodeData {
                uri: None,
                target: Some(ResourceLink {
                    sys: LinkSys { id: id.into() },
                }),
            },
            ..Default::default()
        }
    }

    /// Link target of a hyperlink node, empty string when absent.
    pub fn link_uri(&self) -> &str {
        self.data.uri.as_deref().unwrap_or("")
    }

    /// Asset reference id of an embedded asset block, if present.
    pub fn asset_id(&self) -> Option<&str> {
        self.data
            .target
            .as_ref()
            .map(|target| target.sys.id.as_str())
            .filter(|id| !id.is_empty())
    }
}
