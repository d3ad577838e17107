//! In-memory document store for tests and local development

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;

use super::filter::{Filter, Patch};
use super::r#trait::{Document, DocumentStore, ID_FIELD};

/// Document store backed by a map of collection name to documents in insertion order
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    unique_fields: HashMap<String, Vec<String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inserts and updates that would duplicate `field` within `collection`
    pub fn with_unique_index(mut self, collection: &str, field: &str) -> Self {
        self.unique_fields
            .entry(collection.to_string())
            .or_default()
            .push(field.to_string());
        self
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn check_unique(
        &self,
        collection: &str,
        documents: &[Document],
        candidate: &Document,
        skip_index: Option<usize>,
    ) -> Result<(), DomainError> {
        let mut fields = vec![ID_FIELD];
        if let Some(extra) = self.unique_fields.get(collection) {
            fields.extend(extra.iter().map(String::as_str));
        }

        for field in fields {
            let Some(value) = candidate.get(field) else {
                continue;
            };
            let duplicate = documents
                .iter()
                .enumerate()
                .any(|(index, existing)| {
                    Some(index) != skip_index && existing.get(field) == Some(value)
                });
            if duplicate {
                return Err(DomainError::Conflict {
                    message: format!("duplicate value for {}.{}", collection, field),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<RecordId, DomainError> {
        let id = match document.get(ID_FIELD) {
            Some(Value::String(raw)) => RecordId::parse_str(raw)
                .map_err(|e| DomainError::storage(format!("invalid {}: {}", ID_FIELD, e)))?,
            Some(other) => {
                return Err(DomainError::storage(format!(
                    "{} must be a string, got {}",
                    ID_FIELD, other
                )))
            }
            None => {
                let id = RecordId::new();
                document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
                id
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();
        self.check_unique(collection, documents, &document, None)?;
        documents.push(document);
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, DomainError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|document| filter.matches(document)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, DomainError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> Result<u64, DomainError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(index) = documents.iter().position(|document| filter.matches(document)) else {
            return Ok(0);
        };

        let mut updated = documents[index].clone();
        patch.apply(&mut updated);
        self.check_unique(collection, documents, &updated, Some(index))?;
        documents[index] = updated;
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, DomainError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match documents.iter().position(|document| filter.matches(document)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
