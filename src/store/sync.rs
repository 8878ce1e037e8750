//! Store Sync
//!
//! Owns the three content collections and mirrors every mutation to a
//! [`ContentSource`].
//!
//! ## Consistency contract
//!
//! - `load` fetches all sections concurrently and replaces them in one
//!   assignment; any failure leaves the previous collections in place.
//! - `add` appends only after the source has assigned an id; nothing is
//!   shown optimistically.
//! - `remove` drops the item locally whatever the source answered. A failed
//!   backend delete therefore leaves the view and the backend diverged until
//!   the next load; the failure is reported in [`Removal::remote_error`].

use futures_util::future::try_join3;

use super::error::StoreResult;
use super::source::ContentSource;
use crate::content::{Collections, Fields, Item, Section};

/// Outcome of [`PortfolioStore::remove`] and [`apply_deleted`]
#[derive(Debug)]
pub struct Removal {
    /// Items dropped from the local collection
    pub removed: usize,
    /// Error from the source, if its delete failed
    pub remote_error: Option<super::StoreError>,
}

impl Removal {
    /// Whether the source acknowledged the delete
    pub fn confirmed(&self) -> bool {
        self.remote_error.is_none()
    }
}

/// Fetch every section concurrently and assemble the collections
pub async fn fetch_all<S>(source: &S) -> StoreResult<Collections>
where
    S: ContentSource + ?Sized,
{
    let (works, certifications, blog) = try_join3(
        source.fetch(Section::Works),
        source.fetch(Section::Certifications),
        source.fetch(Section::Blog),
    )
    .await?;

    let items = works.into_iter().chain(certifications).chain(blog);
    Ok(Collections::try_from_items(items)?)
}

/// In-memory content collections synchronized with a content source
pub struct PortfolioStore<S> {
    source: S,
    collections: Collections,
}

impl<S: ContentSource> PortfolioStore<S> {
    /// Create a store with empty collections
    pub fn new(source: S) -> Self {
        Self::with_collections(source, Collections::default())
    }

    /// Create a store starting from existing collections
    pub fn with_collections(source: S, collections: Collections) -> Self {
        Self {
            source,
            collections,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read-only view of the current collections
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// Owned copy of the current collections
    pub fn snapshot(&self) -> Collections {
        self.collections.clone()
    }

    /// Load all sections from the source. No retry.
    pub async fn load(&mut self) -> StoreResult<()> {
        match fetch_all(&self.source).await {
            Ok(collections) => {
                tracing::info!(
                    works = collections.works.len(),
                    certifications = collections.certifications.len(),
                    blog = collections.blog.len(),
                    "Loaded portfolio content"
                );
                self.collections = collections;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load portfolio content");
                Err(e)
            }
        }
    }

    /// Create an item through the source and append it once its id is known
    pub async fn add(&mut self, section: Section, fields: Fields) -> StoreResult<Item> {
        let created = self.source.create(section, &fields).await;
        apply_created(&mut self.collections, section, created)
    }

    /// Delete an item through the source, then drop it locally regardless of
    /// the outcome
    pub async fn remove(&mut self, section: Section, id: &str) -> Removal {
        let deleted = self.source.delete(section, id).await;
        apply_deleted(&mut self.collections, section, id, deleted)
    }
}

/// Apply the answer to a `create` call: append the returned item, or leave
/// the collections untouched on failure.
///
/// Shared by every front end holding its own [`Collections`].
pub fn apply_created(
    collections: &mut Collections,
    section: Section,
    created: StoreResult<Item>,
) -> StoreResult<Item> {
    let item = match created {
        Ok(item) => item,
        Err(e) => {
            tracing::error!(section = %section, error = %e, "Failed to add item");
            return Err(e);
        }
    };

    collections.append(item.clone())?;
    tracing::info!(section = %section, id = %item.id(), "Added item");
    Ok(item)
}

/// Apply the answer to a `delete` call. The item is dropped whatever the
/// source answered; call only once the delete has completed.
pub fn apply_deleted(
    collections: &mut Collections,
    section: Section,
    id: &str,
    deleted: StoreResult<()>,
) -> Removal {
    let remote_error = deleted.err();
    if let Some(e) = &remote_error {
        tracing::warn!(
            section = %section,
            id = %id,
            error = %e,
            "Backend delete failed; removing locally anyway"
        );
    }

    let removed = collections.remove(section, id);
    tracing::info!(section = %section, id = %id, removed, "Removed item");

    Removal {
        removed,
        remote_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{default_collections, ContentError, WorkItem};
    use crate::store::{LocalSource, SourceKind, StoreError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Source whose fetches succeed except for one section, and whose
    /// deletes always fail
    struct FlakySource {
        failing: Option<Section>,
        deleted: AtomicBool,
    }

    #[async_trait]
    impl ContentSource for FlakySource {
        fn kind(&self) -> SourceKind {
            SourceKind::Remote
        }

        async fn fetch(&self, section: Section) -> StoreResult<Vec<Item>> {
            if Some(section) == self.failing {
                return Err(StoreError::Transport("connection reset".to_string()));
            }
            Ok(match section {
                Section::Works => vec![Item::Work(WorkItem {
                    id: "a".to_string(),
                    title: "X".to_string(),
                    ..Default::default()
                })],
                _ => Vec::new(),
            })
        }

        async fn create(&self, _section: Section, _fields: &Fields) -> StoreResult<Item> {
            Err(StoreError::Transport("connection refused".to_string()))
        }

        async fn delete(&self, _section: Section, _id: &str) -> StoreResult<()> {
            self.deleted.store(true, Ordering::SeqCst);
            Err(StoreError::Transport("connection refused".to_string()))
        }
    }

    fn flaky(failing: Option<Section>) -> FlakySource {
        FlakySource {
            failing,
            deleted: AtomicBool::new(false),
        }
    }

    fn blog_fields() -> Fields {
        [
            ("title", "T"),
            ("date", "2025-01-01"),
            ("slug", "t"),
            ("excerpt", "E"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[tokio::test]
    async fn test_load_replaces_collections() {
        let mut store = PortfolioStore::new(flaky(None));
        store.load().await.unwrap();

        assert_eq!(store.collections().works.len(), 1);
        assert_eq!(store.collections().works[0].title, "X");
        assert!(store.collections().certifications.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_prior_state() {
        let prior = default_collections();
        let mut store = PortfolioStore::with_collections(flaky(Some(Section::Blog)), prior.clone());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
        assert_eq!(store.collections(), &prior);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let mut store = PortfolioStore::new(LocalSource::with_defaults());
        store.load().await.unwrap();
        let first = store.snapshot();
        store.load().await.unwrap();
        assert_eq!(store.snapshot(), first);
        assert_eq!(first, default_collections());
    }

    #[tokio::test]
    async fn test_add_appends_after_id_assigned() {
        let mut store = PortfolioStore::new(LocalSource::empty());
        let before = store.collections().len(Section::Blog);

        let item = store.add(Section::Blog, blog_fields()).await.unwrap();

        assert_eq!(store.collections().len(Section::Blog), before + 1);
        let post = &store.collections().blog[0];
        assert_eq!(post.id, item.id());
        assert_eq!(post.title, "T");
        assert_eq!(post.date, "2025-01-01");
        assert_eq!(post.slug, "t");
        assert_eq!(post.excerpt, "E");
    }

    #[tokio::test]
    async fn test_add_failure_leaves_collection_unchanged() {
        let mut store = PortfolioStore::new(flaky(None));
        store.load().await.unwrap();

        assert!(store.add(Section::Blog, blog_fields()).await.is_err());
        assert!(store.collections().blog.is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_id() {
        struct FixedId;

        #[async_trait]
        impl ContentSource for FixedId {
            fn kind(&self) -> SourceKind {
                SourceKind::Remote
            }
            async fn fetch(&self, _section: Section) -> StoreResult<Vec<Item>> {
                Ok(Vec::new())
            }
            async fn create(&self, section: Section, fields: &Fields) -> StoreResult<Item> {
                Ok(Item::from_fields(section, "same", fields)?)
            }
            async fn delete(&self, _section: Section, _id: &str) -> StoreResult<()> {
                Ok(())
            }
        }

        let mut store = PortfolioStore::new(FixedId);
        store.add(Section::Blog, blog_fields()).await.unwrap();
        let err = store.add(Section::Blog, blog_fields()).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Content(ContentError::DuplicateId { .. })
        ));
        assert_eq!(store.collections().blog.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_drops_even_when_backend_fails() {
        let mut store = PortfolioStore::new(flaky(None));
        store.load().await.unwrap();

        let removal = store.remove(Section::Works, "a").await;

        assert!(store.source().deleted.load(Ordering::SeqCst));
        assert_eq!(removal.removed, 1);
        assert!(!removal.confirmed());
        assert!(!store.collections().contains(Section::Works, "a"));
    }

    #[tokio::test]
    async fn test_remove_local_is_confirmed() {
        let mut store = PortfolioStore::new(LocalSource::with_defaults());
        store.load().await.unwrap();

        let removal = store.remove(Section::Works, "1").await;
        assert!(removal.confirmed());
        assert_eq!(removal.removed, 1);
        assert_eq!(store.collections().works.len(), 1);
    }

    #[test]
    fn test_apply_deleted_after_failed_delete() {
        let mut collections = default_collections();
        let before = collections.works.len();

        let removal = apply_deleted(
            &mut collections,
            Section::Works,
            "1",
            Err(StoreError::Transport("connection refused".to_string())),
        );

        assert_eq!(removal.removed, 1);
        assert!(matches!(removal.remote_error, Some(StoreError::Transport(_))));
        assert_eq!(collections.works.len(), before - 1);
        assert!(!collections.contains(Section::Works, "1"));
    }

    #[test]
    fn test_apply_deleted_unknown_id() {
        let mut collections = default_collections();
        let removal = apply_deleted(&mut collections, Section::Blog, "missing", Ok(()));

        assert!(removal.confirmed());
        assert_eq!(removal.removed, 0);
        assert_eq!(collections, default_collections());
    }

    #[test]
    fn test_apply_created() {
        let mut collections = Collections::default();

        let failed = apply_created(
            &mut collections,
            Section::Blog,
            Err(StoreError::Transport("connection refused".to_string())),
        );
        assert!(failed.is_err());
        assert!(collections.blog.is_empty());

        let item = Item::from_fields(Section::Blog, "b1", &blog_fields()).unwrap();
        let added = apply_created(&mut collections, Section::Blog, Ok(item.clone())).unwrap();
        assert_eq!(added, item);
        assert_eq!(collections.blog[0].id, "b1");

        let again = apply_created(&mut collections, Section::Blog, Ok(item));
        assert!(matches!(
            again,
            Err(StoreError::Content(ContentError::DuplicateId { .. }))
        ));
        assert_eq!(collections.blog.len(), 1);
    }
}
