//! Core domain types for the migration toolkit.
//!
//! Defines the migration record written to the staging file and the helpers
//! that map loosely-formatted source values (status strings, timestamps,
//! tag cells) onto typed fields.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::csvfile::CsvRow;
use crate::richtext::AssetDescriptor;

/// Publication state of a blog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    #[default]
    Draft,
}

impl PublishStatus {
    /// Parse a free-form status cell; anything that is not "published"
    /// (case-insensitive) is treated as a draft.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("published") {
            PublishStatus::Published
        } else {
            PublishStatus::Draft
        }
    }

    pub fn is_published(self) -> bool {
        matches!(self, PublishStatus::Published)
    }
}

/// One migrated blog entry, staged between export and import.
///
/// Serialized camelCase so the staging file stays compatible with the
/// migration data produced by earlier tooling. The verbatim source tree is
/// kept alongside the converted body for lossless re-processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    pub name: String,
    pub slug: String,
    /// Markdown body produced from the source rich text.
    #[serde(default)]
    pub blog_text: String,
    /// Verbatim rich-text tree as delivered by the source system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contentful_rich_text: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    /// Manifest of embedded media references found in the rich text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_assets: Vec<AssetDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contentful_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogRecord {
    /// Build a record from one CSV row of a blog export.
    ///
    /// Column lookup is forgiving (see [`crate::csvfile`]); missing cells
    /// degrade to the same defaults the original export tooling used.
    pub fn from_csv_row(row: &CsvRow<'_>) -> Self {
        let name = row
            .get("Name")
            .unwrap_or("Untitled")
            .to_string();
        let status = PublishStatus::parse(row.get("status").unwrap_or(""));
        let published_date = row
            .get("Published")
            .or_else(|| row.get("Created"))
            .and_then(parse_timestamp);

        Self {
            name,
            slug: row.get("Slug").unwrap_or("").to_string(),
            blog_text: row.get("Blog Text").unwrap_or("").to_string(),
            contentful_rich_text: None,
            tags: row.get("Tags").map(parse_tags).unwrap_or_default(),
            status,
            content_type: row.get("Content Type").unwrap_or("Blog").to_string(),
            author: row.get("Created by").map(str::to_string),
            last_updated_by: row.get("Last updated by").map(str::to_string),
            published_date,
            embedded_assets: Vec::new(),
            contentful_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Parse a timestamp the way the source exports write them: RFC 3339,
/// RFC 3339 without seconds, or a bare date. Unparseable input degrades to
/// `None` instead of failing the record.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Contentful exports sometimes omit seconds ("2026-01-05T00:00+00:00")
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%z") {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    None
}

/// Parse a tags cell: a JSON array when it looks like one, otherwise a
/// comma-separated list. Blank entries are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    if let Ok(tags) = serde_json::from_str::<Vec<String>>(raw) {
        return tags;
    }
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
