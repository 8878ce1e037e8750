//! Portfolio backend REST client
//!
//! HTTP content source for a backend exposing `works`, `certifications` and
//! `blog` collections:
//!
//! - `GET {base}/{section}` - list items
//! - `POST {base}/{section}` - create an item from a JSON body of fields
//! - `DELETE {base}/{section}/{id}` - delete an item
//!
//! By default response status codes are not inspected, matching the site's
//! historical behavior: a failed delete still counts as done. Set
//! `strict_status` to turn non-2xx answers into [`StoreError::Status`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use super::error::{StoreError, StoreResult};
use super::source::{ContentSource, SourceKind};
use crate::content::{Fields, Item, Section};

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL including any API prefix (e.g. "https://host/api")
    pub base_url: String,
    /// Reject non-2xx responses instead of ignoring the status
    pub strict_status: bool,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            strict_status: false,
            request_timeout: None,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// REST backend content source
pub struct RemoteSource {
    client: Client,
    config: RemoteConfig,
}

impl RemoteSource {
    pub fn new(config: RemoteConfig) -> StoreResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn section_url(&self, section: Section) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            section.as_str()
        )
    }

    fn item_url(&self, section: Section, id: &str) -> String {
        format!("{}/{}", self.section_url(section), urlencoding::encode(id))
    }

    /// In strict mode, turn a non-success status into an error
    async fn check(&self, response: Response) -> StoreResult<Response> {
        if !self.config.strict_status || response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContentSource for RemoteSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>> {
        let response = self.client.get(self.section_url(section)).send().await?;
        let response = self.check(response).await?;

        let records: Vec<Value> = response.json().await?;
        let items = records
            .into_iter()
            .map(|record| Item::decode(section, record))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(section = %section, count = items.len(), "Fetched section");
        Ok(items)
    }

    async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item> {
        let response = self
            .client
            .post(self.section_url(section))
            .json(fields)
            .send()
            .await?;
        let response = self.check(response).await?;

        let record: Value = response.json().await?;
        Ok(Item::decode(section, record)?)
    }

    async fn delete(&self, section: Section, id: &str) -> StoreResult<()> {
        let response = self.client.delete(self.item_url(section, id)).send().await?;
        self.check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::new("http://localhost:5000/api");
        assert!(!config.strict_status);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_urls() {
        let source = RemoteSource::new(RemoteConfig::new("http://localhost:5000/api/")).unwrap();
        assert_eq!(
            source.section_url(Section::Certifications),
            "http://localhost:5000/api/certifications"
        );
        assert_eq!(
            source.item_url(Section::Blog, "a b/c"),
            "http://localhost:5000/api/blog/a%20b%2Fc"
        );
        assert_eq!(source.kind(), SourceKind::Remote);
    }
}
