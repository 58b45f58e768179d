//! Client for the Contentful Delivery API.
//!
//! Fetches published entries of one content type, paging through the
//! collection endpoint and merging the `includes.Asset` payloads of every
//! page into a single asset index for the collector to resolve against.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::ContentfulConfig;
use crate::richtext::ResolvedAsset;

/// Page size for the entries endpoint; the API caps pages at 1000 but
/// smaller pages keep response bodies reviewable in logs.
const PAGE_SIZE: usize = 100;

/// Depth of linked-entry resolution requested per page.
const INCLUDE_DEPTH: u8 = 10;

/// One page of the entries collection endpoint.
#[derive(Debug, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

/// A source entry: system metadata plus the content-model fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: EntryFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Present only on published entries.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content_type: Option<SysLink>,
    #[serde(default)]
    pub created_by: Option<SysLink>,
    #[serde(default)]
    pub updated_by: Option<SysLink>,
}

impl EntrySys {
    pub fn content_type_id(&self) -> Option<&str> {
        self.content_type.as_ref().map(|link| link.sys.id.as_str())
    }

    pub fn created_by_id(&self) -> Option<&str> {
        self.created_by.as_ref().map(|link| link.sys.id.as_str())
    }

    pub fn updated_by_id(&self) -> Option<&str> {
        self.updated_by.as_ref().map(|link| link.sys.id.as_str())
    }
}

/// Link object as it appears inside `sys` blocks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysLink {
    #[serde(default)]
    pub sys: SysLinkTarget,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysLinkTarget {
    #[serde(default)]
    pub id: String,
}

/// Fields of the blog content model. All optional: the migration must not
/// fail on entries that predate the current model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Rich-text body, kept as raw JSON until conversion.
    #[serde(default)]
    pub blog_text: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
}

/// Linked resources delivered alongside a page of entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default, rename = "Asset")]
    pub assets: Vec<IncludedAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludedAsset {
    pub sys: SysLinkTarget,
    #[serde(default)]
    pub fields: IncludedAssetFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludedAssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Lookup table from asset reference id to resolved metadata, built from
/// the `includes.Asset` payloads of the fetched pages.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    assets: HashMap<String, ResolvedAsset>,
}

impl AssetIndex {
    /// Merge one page's included assets into the index.
    pub fn add_includes(&mut self, includes: &Includes) {
        for asset in &includes.assets {
            if asset.sys.id.is_empty() {
                continue;
            }
            let file = asset.fields.file.clone().unwrap_or_default();
            self.assets.insert(
                asset.sys.id.clone(),
                ResolvedAsset {
                    url: file.url,
                    title: asset.fields.title.clone(),
                    content_type: file.content_type,
                },
            );
        }
    }

    /// Resolve one asset reference, if the source delivered it.
    pub fn resolve(&self, id: &str) -> Option<ResolvedAsset> {
        self.assets.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Blocking client for the Contentful Delivery API.
pub struct ContentfulClient {
    agent: ureq::Agent,
    api_base: String,
    space_id: String,
    environment: String,
    access_token: String,
}

impl ContentfulClient {
    /// Create a client from the given configuration.
    pub fn new(config: &ContentfulConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build()
            .new_agent();
        Self {
            agent,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            space_id: config.space_id.clone(),
            environment: config.environment.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Fetch every entry of the given content type, paging until the
    /// collection is exhausted. Returns the entries in API order together
    /// with the asset index merged across all pages.
    pub fn fetch_entries(&self, content_type: &str) -> Result<(Vec<Entry>, AssetIndex)> {
        let mut entries = Vec::new();
        let mut index = AssetIndex::default();
        let mut skip = 0;

        loop {
            let page = self.fetch_page(content_type, skip)?;
            let fetched = page.items.len();

            entries.extend(page.items);
            if let Some(includes) = &page.includes {
                index.add_includes(includes);
            }

            if fetched == 0 || entries.len() >= page.total {
                break;
            }
            skip += fetched;
        }

        Ok((entries, index))
    }

    fn fetch_page(&self, content_type: &str, skip: usize) -> Result<EntriesResponse> {
        let url = format!(
            "{}/spaces/{}/environments/{}/entries?content_type={}&limit={}&skip={}&include={}",
            self.api_base,
            self.space_id,
            self.environment,
            content_type,
            PAGE_SIZE,
            skip,
            INCLUDE_DEPTH,
        );

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Authorization", format!("Bearer {}", self.access_token))
            .call()
            .map_err(|error| match error {
                ureq::Error::StatusCode(code) => anyhow::anyhow!(
                    "Contentful rejected the request with status {} (check space id, \
                     environment, and access token)",
                    code
                ),
                other => anyhow::anyhow!("Failed to reach Contentful: {}", other),
            })?;

        response
            .body_mut()
            .read_json::<EntriesResponse>()
            .context("Failed to decode Contentful entries response")
    }
}
