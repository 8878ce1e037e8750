//! Content sources
//!
//! [`ContentSource`] is the seam between Store Sync and wherever content
//! lives: a REST backend ([`RemoteSource`](super::RemoteSource)), the embedded
//! defaults ([`LocalSource`]), or the browser's fetch in the front end.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

use super::error::StoreResult;
use crate::content::{default_collections, Collections, Fields, Item, Section};

/// Where content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Backend-fetched; ids assigned by the backend
    Remote,
    /// Compile-time defaults; ids assigned by a local clock
    Local,
}

/// Backend operations Store Sync mirrors its mutations to.
///
/// Browser implementations produce `!Send` futures, so the trait only
/// requires `Send` futures off wasm.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContentSource {
    fn kind(&self) -> SourceKind;

    /// `GET /{section}`: every item of a section, in backend order
    async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>>;

    /// `POST /{section}`: create an item and return it with its assigned id
    async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item>;

    /// `DELETE /{section}/{id}`
    async fn delete(&self, section: Section, id: &str) -> StoreResult<()>;
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl<S> ContentSource for Box<S>
where
    S: ContentSource + Send + Sync + ?Sized,
{
    fn kind(&self) -> SourceKind {
        (**self).kind()
    }

    async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>> {
        (**self).fetch(section).await
    }

    async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item> {
        (**self).create(section, fields).await
    }

    async fn delete(&self, section: Section, id: &str) -> StoreResult<()> {
        (**self).delete(section, id).await
    }
}

/// Monotonically increasing, time-based id generator.
///
/// Ids are epoch milliseconds; two ids minted in the same millisecond are
/// bumped so the sequence stays strictly increasing.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: AtomicI64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now: i64) -> String {
        let advance = |prev: i64| now.max(prev + 1);
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(advance(prev)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        advance(prev).to_string()
    }
}

/// Standalone content source backed by a fixed seed
#[derive(Debug)]
pub struct LocalSource {
    seed: Collections,
    ids: ClockIds,
}

impl LocalSource {
    pub fn new(seed: Collections) -> Self {
        Self {
            seed,
            ids: ClockIds::new(),
        }
    }

    /// Local source seeded with the embedded default content
    pub fn with_defaults() -> Self {
        Self::new(default_collections())
    }

    pub fn empty() -> Self {
        Self::new(Collections::default())
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContentSource for LocalSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Local
    }

    async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>> {
        Ok(self.seed.items(section))
    }

    async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item> {
        Ok(Item::from_fields(section, self.ids.next(), fields)?)
    }

    async fn delete(&self, _section: Section, _id: &str) -> StoreResult<()> {
        Ok(())
    }
}
