//! Collection-oriented persistence contract.
//!
//! Documents are JSON objects keyed by field name; the identifier lives in
//! `_id` as a 24 character hex string. Repositories translate between
//! entities and documents, so the store itself knows nothing about users,
//! products or orders.

use async_trait::async_trait;

use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;

use super::filter::{Filter, Patch};

/// A stored document
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field holding the document identifier
pub const ID_FIELD: &str = "_id";

/// Persistence service shared by all repositories
///
/// Failures are reported as `DomainError::Storage`; a unique-key violation
/// is reported as `DomainError::Conflict`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, keeping its `_id` if present and generating one otherwise
    async fn insert(&self, collection: &str, document: Document) -> Result<RecordId, DomainError>;

    /// First document matching every field of the filter
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, DomainError>;

    /// All documents matching every field of the filter
    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, DomainError>;

    /// Set the patch fields on the first matching document; returns the matched count
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> Result<u64, DomainError>;

    /// Remove the first matching document; returns the deleted count
    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, DomainError>;
}
