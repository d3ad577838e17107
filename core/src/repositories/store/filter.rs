//! Equality filters and field patches.

use serde_json::Value;

use crate::domain::value_objects::RecordId;

use super::r#trait::{Document, ID_FIELD};

/// Conjunction of top-level field equalities; empty matches everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Document);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: &RecordId) -> Self {
        Self::new().eq(ID_FIELD, id.to_hex())
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field values to overwrite, like a `$set` update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch(Document);

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn apply(&self, document: &mut Document) {
        for (field, value) in &self.0 {
            document.insert(field.clone(), value.clone());
        }
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Document> for Patch {
    fn from(document: Document) -> Self {
        Self(document)
    }
}
