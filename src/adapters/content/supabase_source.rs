//! Supabase Source - reads showcase content from Supabase's REST interface.
//!
//! Projects and certificates live in two tables and are fetched with
//! `GET {url}/rest/v1/{table}?select=*`. Requests carry the anonymous key
//! both as `apikey` and as a bearer token. The tech stack is not stored
//! remotely and is served from local data.
//!
//! # Configuration
//!
//! ```ignore
//! let config = SupabaseSourceConfig::new("https://xyz.supabase.co", anon_key)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let source = SupabaseShowcaseSource::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use super::static_source::default_tech_stack;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::showcase::{Certificate, Project, ShowcaseCatalog, TechStackItem};
use crate::ports::ShowcaseSource;

/// Configuration for the Supabase source.
#[derive(Debug, Clone)]
pub struct SupabaseSourceConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    anon_key: SecretString,
    pub timeout: Duration,
    pub projects_table: String,
    pub certificates_table: String,
}

impl SupabaseSourceConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: SecretString::new(anon_key.into()),
            timeout: Duration::from_secs(10),
            projects_table: "projects".to_string(),
            certificates_table: "certificates".to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_tables(
        mut self,
        projects: impl Into<String>,
        certificates: impl Into<String>,
    ) -> Self {
        self.projects_table = projects.into();
        self.certificates_table = certificates.into();
        self
    }

    fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }
}

/// Showcase source backed by Supabase.
pub struct SupabaseShowcaseSource {
    config: SupabaseSourceConfig,
    client: Client,
    tech_stack: Vec<TechStackItem>,
}

impl SupabaseShowcaseSource {
    /// Creates the source. Fails only if the HTTP client cannot be built.
    pub fn new(config: SupabaseSourceConfig) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            config,
            client,
            tech_stack: default_tech_stack(),
        })
    }

    /// Replaces the locally served tech stack.
    pub fn with_tech_stack(mut self, tech_stack: Vec<TechStackItem>) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}?select=*", self.config.base_url, table)
    }

    async fn fetch_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, DomainError> {
        let key = self.config.anon_key();
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", key)
            .bearer_auth(key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                DomainError::new(
                    ErrorCode::ContentUnavailable,
                    format!("Supabase request failed: {}", reason),
                )
                .with_detail("table", table)
            })?;

        let response = handle_response_status(response, table).await?;

        response.json::<Vec<T>>().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ContentMalformed,
                format!("Failed to parse {} rows: {}", table, e),
            )
            .with_detail("table", table)
        })
    }
}

async fn handle_response_status(response: Response, table: &str) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match status.as_u16() {
        401 | 403 => "Supabase rejected the anonymous key".to_string(),
        404 => format!("Supabase table '{}' not found", table),
        _ => format!("Supabase returned {}: {}", status, body),
    };

    Err(DomainError::new(ErrorCode::ContentUnavailable, message)
        .with_detail("table", table)
        .with_detail("status", status.as_u16().to_string()))
}

#[async_trait]
impl ShowcaseSource for SupabaseShowcaseSource {
    async fn fetch_catalog(&self) -> Result<ShowcaseCatalog, DomainError> {
        let (projects, certificates) = futures::try_join!(
            self.fetch_table::<Project>(&self.config.projects_table),
            self.fetch_table::<Certificate>(&self.config.certificates_table),
        )?;

        tracing::debug!(
            projects = projects.len(),
            certificates = certificates.len(),
            "Fetched showcase content from Supabase"
        );

        Ok(ShowcaseCatalog {
            projects,
            certificates,
            tech_stack: self.tech_stack.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}
