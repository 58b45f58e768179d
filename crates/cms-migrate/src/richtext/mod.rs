//! Rich-text document handling.
//!
//! The tree model ([`node`]), the markdown converter ([`markdown`]) and the
//! asset collector ([`assets`]): two independent pure reducers over the
//! same immutable tree.

pub mod assets;
pub mod markdown;
pub mod node;

pub use assets::{collect_assets, collect_assets_with, AssetDescriptor, ResolvedAsset};
pub use markdown::to_markdown;
pub use node::{DocumentNode, Mark, MarkKind, NodeData, NodeKind};
