//! Content record types
//!
//! The three mutable sections of the site (works, certifications, blog),
//! their record types, and the tagged [`Item`] that moves between a content
//! source and the in-memory collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::{ContentError, ContentResult};

/// Field values collected from an admin form, keyed by field name
pub type Fields = BTreeMap<String, String>;

/// One of the three mutable content collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Works,
    Certifications,
    Blog,
}

impl Section {
    /// All sections, in navigation order
    pub const ALL: [Section; 3] = [Section::Works, Section::Certifications, Section::Blog];

    /// Path segment used by the backend (`/works`, `/certifications`, `/blog`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Works => "works",
            Section::Certifications => "certifications",
            Section::Blog => "blog",
        }
    }

    /// Singular display name of one record in this section
    pub fn singular(&self) -> &'static str {
        match self {
            Section::Works => "Work",
            Section::Certifications => "Certification",
            Section::Blog => "Blog Post",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "works" | "work" => Ok(Section::Works),
            "certifications" | "certification" => Ok(Section::Certifications),
            "blog" => Ok(Section::Blog),
            _ => Err(ContentError::UnknownSection(s.to_string())),
        }
    }
}

/// A portfolio project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
}

/// A certification badge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub image_url: String,
}

/// A blog post teaser; the slug is unique by convention only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: String,
    pub slug: String,
    pub excerpt: String,
}

impl BlogPost {
    /// Link target of the "Read More" anchor
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Records that live in exactly one section
pub trait Record {
    const SECTION: Section;

    fn id(&self) -> &str;
}

impl Record for WorkItem {
    const SECTION: Section = Section::Works;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Certification {
    const SECTION: Section = Section::Certifications;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for BlogPost {
    const SECTION: Section = Section::Blog;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A record from any section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Work(WorkItem),
    Certification(Certification),
    Blog(BlogPost),
}

impl Item {
    /// Decode a backend record for `section`.
    ///
    /// The backend's `_id` becomes the local `id` (it wins over an `id`
    /// already present in the body); numeric identifiers are stringified.
    pub fn decode(section: Section, value: Value) -> ContentResult<Self> {
        let value = normalize_record(value)?;
        Self::from_value(section, value)
    }

    /// Build an item from submitted form fields and an assigned id
    pub fn from_fields(section: Section, id: impl Into<String>, fields: &Fields) -> ContentResult<Self> {
        let mut map: Map<String, Value> = fields
            .iter()
            .filter(|(name, _)| name.as_str() != "_id")
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        map.insert("id".to_string(), Value::String(id.into()));
        Self::from_value(section, Value::Object(map))
    }

    fn from_value(section: Section, value: Value) -> ContentResult<Self> {
        let item = match section {
            Section::Works => Item::Work(serde_json::from_value(value)?),
            Section::Certifications => Item::Certification(serde_json::from_value(value)?),
            Section::Blog => Item::Blog(serde_json::from_value(value)?),
        };
        Ok(item)
    }

    pub fn section(&self) -> Section {
        match self {
            Item::Work(_) => Section::Works,
            Item::Certification(_) => Section::Certifications,
            Item::Blog(_) => Section::Blog,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Item::Work(w) => &w.id,
            Item::Certification(c) => &c.id,
            Item::Blog(b) => &b.id,
        }
    }

    /// Title for works and posts, name for certifications
    pub fn headline(&self) -> &str {
        match self {
            Item::Work(w) => &w.title,
            Item::Certification(c) => &c.name,
            Item::Blog(b) => &b.title,
        }
    }

    /// Secondary line in admin listings: category, issuer or date
    pub fn subtitle(&self) -> &str {
        match self {
            Item::Work(w) => &w.category,
            Item::Certification(c) => &c.issuer,
            Item::Blog(b) => &b.date,
        }
    }
}

fn normalize_record(value: Value) -> ContentResult<Value> {
    let Value::Object(mut map) = value else {
        return Err(ContentError::Decode("expected a JSON object".to_string()));
    };

    let raw = match map.remove("_id") {
        Some(id) => id,
        None => map.remove("id").ok_or(ContentError::MissingId)?,
    };

    let id = match raw {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ContentError::Decode(format!(
                "unsupported identifier: {}",
                other
            )))
        }
    };

    map.insert("id".to_string(), Value::String(id));
    Ok(Value::Object(map))
}
