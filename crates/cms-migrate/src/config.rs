//! Environment-backed configuration.
//!
//! Settings come from the process environment; a `.env` file in the
//! working directory is honored the way the original tooling did it.
//! Already-exported variables always win over `.env` entries.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::errors;

/// Default Contentful Delivery API endpoint.
pub const DEFAULT_CONTENTFUL_API: &str = "https://cdn.contentful.com";

/// Default Strapi instance, as used by a local development setup.
pub const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";

/// Credentials and endpoint selection for the source content store.
#[derive(Debug, Clone)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub api_base: String,
    /// Content type id to export (the blog model in the source space).
    pub content_type: String,
}

impl ContentfulConfig {
    /// Load from the environment. Space id and access token are required;
    /// everything else has a sensible default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            space_id: require_env("CONTENTFUL_SPACE_ID")?,
            access_token: require_env("CONTENTFUL_ACCESS_TOKEN")?,
            environment: env_or("CONTENTFUL_ENVIRONMENT", "master"),
            api_base: env_or("CONTENTFUL_API_URL", DEFAULT_CONTENTFUL_API),
            content_type: env_or("CONTENTFUL_CONTENT_TYPE", "blog"),
        })
    }
}

/// Endpoint and optional credentials for the target content store.
#[derive(Debug, Clone)]
pub struct StrapiConfig {
    pub url: String,
    pub api_token: Option<String>,
}

impl StrapiConfig {
    /// Load from the environment. The URL defaults to a local instance;
    /// the API token is optional (Strapi may allow public create/read).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            url: env_or("STRAPI_URL", DEFAULT_STRAPI_URL),
            api_token: env::var("STRAPI_API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        }
    }
}

/// Directory holding migration artifacts: `MIGRATE_DATA_DIR` when set,
/// `./data` otherwise.
pub fn data_dir() -> PathBuf {
    env::var("MIGRATE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn require_env(var: &str) -> Result<String> {
    env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow::Error::new(errors::missing_env(var)))
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
