//! Admin form builder
//!
//! Each section declares its add-form as a list of field descriptors. A
//! [`FormState`] holds the values being edited and turns them into a
//! [`Fields`] record on submit, resetting itself afterwards.

use thiserror::Error;

use crate::content::{Fields, Section};

/// Notice shown by the (unimplemented) edit control
pub const EDIT_PLACEHOLDER: &str = "Edit functionality to be implemented!";

/// Shown in an admin list with no items
pub const EMPTY_LIST_NOTICE: &str = "No items yet. Add one using the form.";

/// Form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line input
    Text,
    /// Multi-line textarea
    Paragraph,
}

/// One editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
    }
}

const fn paragraph(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Paragraph,
    }
}

/// Add-form declaration for one section
#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub section: Section,
    pub fields: &'static [FieldSpec],
}

pub static WORK_FORM: FormSpec = FormSpec {
    section: Section::Works,
    fields: &[
        text("title", "Title"),
        text("category", "Category"),
        text("imageUrl", "Image URL"),
        paragraph("description", "Description"),
    ],
};

pub static CERTIFICATION_FORM: FormSpec = FormSpec {
    section: Section::Certifications,
    fields: &[
        text("name", "Name"),
        text("issuer", "Issuer"),
        text("date", "Date"),
        text("imageUrl", "Image URL"),
    ],
};

pub static BLOG_FORM: FormSpec = FormSpec {
    section: Section::Blog,
    fields: &[
        text("title", "Title"),
        text("date", "Date"),
        text("slug", "Slug (e.g., my-new-post)"),
        paragraph("excerpt", "Excerpt"),
    ],
};

/// The add-form of a section
pub fn form_spec(section: Section) -> &'static FormSpec {
    match section {
        Section::Works => &WORK_FORM,
        Section::Certifications => &CERTIFICATION_FORM,
        Section::Blog => &BLOG_FORM,
    }
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// "Add New Work"
    pub fn heading(&self) -> String {
        format!("Add New {}", self.section.singular())
    }

    /// "Add Work"
    pub fn submit_label(&self) -> String {
        format!("Add {}", self.section.singular())
    }

    /// "Existing Works"
    pub fn list_heading(&self) -> String {
        format!("Existing {}s", self.section.singular())
    }

    /// A record with every field present and empty
    pub fn empty_fields(&self) -> Fields {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), String::new()))
            .collect()
    }
}

/// Values being edited in an add-form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    spec: &'static FormSpec,
    values: Fields,
}

impl FormState {
    pub fn new(section: Section) -> Self {
        let spec = form_spec(section);
        Self {
            spec,
            values: spec.empty_fields(),
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn section(&self) -> Section {
        self.spec.section
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .spec
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.values.insert(field.name.to_string(), value.into());
        Ok(())
    }

    /// First field left blank, if any. Every field is required.
    pub fn missing(&self) -> Option<&'static FieldSpec> {
        self.spec
            .fields
            .iter()
            .find(|field| self.value(field.name).trim().is_empty())
    }

    /// Hand out the collected record and reset every field to empty.
    ///
    /// Values are passed through verbatim. On error nothing is reset.
    pub fn submit(&mut self) -> Result<Fields, FormError> {
        if let Some(field) = self.missing() {
            return Err(FormError::Missing(field.label));
        }
        Ok(std::mem::replace(&mut self.values, self.spec.empty_fields()))
    }

    pub fn reset(&mut self) {
        self.values = self.spec.empty_fields();
    }
}

/// Per-row controls in an admin list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Declared but not implemented
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}
