//! In-memory content collections
//!
//! Insertion-ordered vectors, one per section. Ids are unique within a
//! section; there are no references between sections.

use serde::Serialize;

use super::error::{ContentError, ContentResult};
use super::types::{BlogPost, Certification, Item, Record, Section, WorkItem};

/// The three mutable collections of the site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collections {
    pub works: Vec<WorkItem>,
    pub certifications: Vec<Certification>,
    pub blog: Vec<BlogPost>,
}

impl Collections {
    /// Build collections from a stream of items, enforcing unique ids
    pub fn try_from_items(items: impl IntoIterator<Item = Item>) -> ContentResult<Self> {
        let mut collections = Self::default();
        for item in items {
            collections.append(item)?;
        }
        Ok(collections)
    }

    /// Append an item to the end of its section
    pub fn append(&mut self, item: Item) -> ContentResult<()> {
        if self.contains(item.section(), item.id()) {
            return Err(ContentError::DuplicateId {
                section: item.section(),
                id: item.id().to_string(),
            });
        }

        match item {
            Item::Work(work) => self.works.push(work),
            Item::Certification(cert) => self.certifications.push(cert),
            Item::Blog(post) => self.blog.push(post),
        }
        Ok(())
    }

    /// Drop every item with `id` from `section`, returning how many were removed
    pub fn remove(&mut self, section: Section, id: &str) -> usize {
        match section {
            Section::Works => drop_id(&mut self.works, id),
            Section::Certifications => drop_id(&mut self.certifications, id),
            Section::Blog => drop_id(&mut self.blog, id),
        }
    }

    pub fn contains(&self, section: Section, id: &str) -> bool {
        match section {
            Section::Works => self.works.iter().any(|w| w.id() == id),
            Section::Certifications => self.certifications.iter().any(|c| c.id() == id),
            Section::Blog => self.blog.iter().any(|b| b.id() == id),
        }
    }

    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Works => self.works.len(),
            Section::Certifications => self.certifications.len(),
            Section::Blog => self.blog.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty() && self.certifications.is_empty() && self.blog.is_empty()
    }

    /// Snapshot of one section as tagged items
    pub fn items(&self, section: Section) -> Vec<Item> {
        match section {
            Section::Works => self.works.iter().cloned().map(Item::Work).collect(),
            Section::Certifications => self
                .certifications
                .iter()
                .cloned()
                .map(Item::Certification)
                .collect(),
            Section::Blog => self.blog.iter().cloned().map(Item::Blog).collect(),
        }
    }
}

fn drop_id<T: Record>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: &str, title: &str) -> Item {
        Item::Work(WorkItem {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        })
    }

    fn post(id: &str) -> Item {
        Item::Blog(BlogPost {
            id: id.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut c = Collections::default();
        c.append(work("b", "second")).unwrap();
        c.append(work("a", "first")).unwrap();

        let titles: Vec<_> = c.works.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(c.len(Section::Works), 2);
    }

    #[test]
    fn test_duplicate_id_rejected_within_section_only() {
        let mut c = Collections::default();
        c.append(work("1", "X")).unwrap();

        let err = c.append(work("1", "Y")).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { section: Section::Works, .. }));
        assert_eq!(c.works.len(), 1);

        // Same id in another section is fine
        c.append(post("1")).unwrap();
        assert!(c.contains(Section::Blog, "1"));
    }

    #[test]
    fn test_remove_drops_matching_id() {
        let mut c = Collections::try_from_items(vec![work("a", "X"), work("b", "Y")]).unwrap();

        assert_eq!(c.remove(Section::Works, "a"), 1);
        assert!(!c.contains(Section::Works, "a"));
        assert_eq!(c.remove(Section::Works, "a"), 0);
        assert_eq!(c.remove(Section::Blog, "b"), 0);
        assert_eq!(c.works.len(), 1);
    }

    #[test]
    fn test_items_snapshot() {
        let c = Collections::try_from_items(vec![work("a", "X"), post("p")]).unwrap();
        let works = c.items(Section::Works);
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].headline(), "X");
        assert!(c.items(Section::Certifications).is_empty());
        assert!(!c.is_empty());
        assert!(Collections::default().is_empty());
    }
}
