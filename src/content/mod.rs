//! Portfolio content model
//!
//! Records for the three mutable sections, the collections that hold them,
//! and the static profile/skills data.

mod collections;
mod defaults;
mod error;
mod profile;
mod types;

pub use collections::Collections;
pub use defaults::default_collections;
pub use error::{ContentError, ContentResult};
pub use profile::{default_skills, Profile, Skill, Socials};
pub use types::{BlogPost, Certification, Fields, Item, Record, Section, WorkItem};
