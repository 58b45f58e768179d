//! Client for the Strapi REST content API.
//!
//! Wraps the blog collection endpoints behind typed calls: create during
//! import, list/detail/count during inspection. Non-2xx responses are
//! decoded from Strapi's error envelope so the operator sees the real
//! message, not just a status code.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use crate::config::StrapiConfig;
use crate::domain::BlogRecord;

/// Errors surfaced by the target-store client.
#[derive(Debug, Error)]
pub enum StrapiError {
    /// The API answered with an error envelope.
    #[error("Strapi rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    /// The instance could not be reached at all.
    #[error("Cannot reach Strapi at {url}: {reason}")]
    Unreachable { url: String, reason: String },
    /// The API answered with something that is not the expected shape.
    #[error("Unexpected response from Strapi: {0}")]
    Malformed(String),
}

/// A blog entry as the target store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: u64,
    #[serde(default)]
    pub attributes: BlogAttributes,
}

/// Attribute payload of a blog entry. All optional; the check command must
/// render whatever the store has.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogAttributes {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub status: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub blog_text: Option<String>,
    pub tags: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    data: Vec<Blog>,
}

#[derive(Debug, Deserialize)]
struct SingleResponse {
    #[serde(default)]
    data: Option<Blog>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Blocking client for a Strapi instance.
pub struct StrapiClient {
    agent: ureq::Agent,
    base_url: String,
    api_token: Option<String>,
}

impl StrapiClient {
    /// Create a client from the given configuration.
    pub fn new(config: &StrapiConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the blogs endpoint to verify the instance is reachable.
    pub fn ping(&self) -> Result<(), StrapiError> {
        self.get_collection("/api/blogs?pagination[pageSize]=1")
            .map(|_| ())
    }

    /// Create one blog entry from a migration record.
    pub fn create_blog(&self, record: &BlogRecord) -> Result<(), StrapiError> {
        let published_at = if record.status.is_published() {
            record.published_date
        } else {
            None
        };
        let payload = json!({
            "data": {
                "name": record.name,
                "slug": record.slug,
                "blogText": record.blog_text,
                "contentfulRichText": record.contentful_rich_text,
                "tags": record.tags,
                "status": record.status,
                "contentType": record.content_type,
                "author": record.author,
                "lastUpdatedBy": record.last_updated_by,
                "publishedDate": record.published_date,
                "publishedAt": published_at,
            }
        });

        let url = format!("{}/api/blogs", self.base_url);
        let mut response = self
            .apply_auth(self.agent.post(url.as_str()))
            .send_json(&payload)
            .map_err(|error| self.unreachable(error))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        Err(self.api_error(status, response.body_mut().read_to_string().ok()))
    }

    /// List blog entries with all relations populated.
    pub fn list_blogs(&self) -> Result<Vec<Blog>, StrapiError> {
        self.get_collection("/api/blogs?populate=*")
    }

    /// Fetch one blog entry by numeric id. `Ok(None)` when the store does
    /// not have it.
    pub fn get_blog(&self, id: u64) -> Result<Option<Blog>, StrapiError> {
        let url = format!("{}/api/blogs/{}?populate=*", self.base_url, id);
        let mut response = self
            .apply_auth(self.agent.get(url.as_str()))
            .call()
            .map_err(|error| self.unreachable(error))?;

        let status = response.status().as_u16();
        if status == 404 {
            return Ok(None);
        }
        if !(200..300).contains(&status) {
            return Err(self.api_error(status, response.body_mut().read_to_string().ok()));
        }

        let body: SingleResponse = response
            .body_mut()
            .read_json()
            .map_err(|error| StrapiError::Malformed(error.to_string()))?;
        Ok(body.data)
    }

    /// Find one blog entry by slug. `Ok(None)` when no entry matches.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, StrapiError> {
        let path = format!("/api/blogs?filters[slug][$eq]={}&populate=*", slug);
        let blogs = self.get_collection(&path)?;
        Ok(blogs.into_iter().next())
    }

    fn get_collection(&self, path: &str) -> Result<Vec<Blog>, StrapiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut response = self
            .apply_auth(self.agent.get(url.as_str()))
            .call()
            .map_err(|error| self.unreachable(error))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(self.api_error(status, response.body_mut().read_to_string().ok()));
        }

        let body: CollectionResponse = response
            .body_mut()
            .read_json()
            .map_err(|error| StrapiError::Malformed(error.to_string()))?;
        Ok(body.data)
    }

    fn apply_auth<S>(&self, request: ureq::RequestBuilder<S>) -> ureq::RequestBuilder<S> {
        match &self.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    fn unreachable(&self, error: ureq::Error) -> StrapiError {
        StrapiError::Unreachable {
            url: self.base_url.clone(),
            reason: error.to_string(),
        }
    }

    fn api_error(&self, status: u16, body: Option<String>) -> StrapiError {
        let message = body
            .as_deref()
            .and_then(|raw| serde_json::from_str::<ErrorEnvelope>(raw).ok())
            .and_then(|envelope| envelope.error)
            .map(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "no error details in response".to_string());
        StrapiError::Api { status, message }
    }
}
