//! MongoDB implementation of the DocumentStore contract

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Collection, Database};
use serde_json::Value;

use ec_core::domain::value_objects::RecordId;
use ec_core::errors::DomainError;
use ec_core::repositories::{Document, DocumentStore, Filter, Patch};

use super::convert::{from_bson_document, to_bson_document};
use crate::InfrastructureError;

const ID_FIELD: &str = "_id";

/// Document store over the collections of one database
///
/// Every call is bounded by `operation_timeout`; an elapsed deadline is a
/// storage failure, never a hang.
#[derive(Clone)]
pub struct MongoDocumentStore {
    database: Database,
    operation_timeout: Duration,
}

impl MongoDocumentStore {
    pub fn new(database: Database, operation_timeout: Duration) -> Self {
        Self {
            database,
            operation_timeout,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self, name: &str) -> Collection<bson::Document> {
        self.database.collection(name)
    }

    async fn bounded<T, F>(
        &self,
        operation: &str,
        collection: &str,
        future: F,
    ) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, mongodb::error::Error>> + Send,
    {
        let result = match tokio::time::timeout(self.operation_timeout, future).await {
            Ok(result) => result.map_err(InfrastructureError::from),
            Err(_) => Err(InfrastructureError::timeout(format!("{} {}", operation, collection))),
        };

        result.map_err(|err| {
            if !err.is_duplicate_key() {
                tracing::error!(
                    operation,
                    collection,
                    error = %err,
                    "Document store operation failed"
                );
            }
            DomainError::from(err)
        })
    }
}

fn document_id(document: &mut Document) -> Result<RecordId, DomainError> {
    match document.get(ID_FIELD) {
        Some(Value::String(raw)) => RecordId::parse_str(raw)
            .map_err(|e| DomainError::storage(format!("invalid {}: {}", ID_FIELD, e))),
        Some(other) => Err(DomainError::storage(format!(
            "{} must be a string, got {}",
            ID_FIELD, other
        ))),
        None => {
            let id = RecordId::new();
            document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
            Ok(id)
        }
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<RecordId, DomainError> {
        let id = document_id(&mut document)?;
        let encoded = to_bson_document(&document);
        let target = self.collection(collection);

        self.bounded("insert", collection, target.insert_one(encoded, None))
            .await?;
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, DomainError> {
        let encoded = to_bson_document(filter.as_document());
        let target = self.collection(collection);

        let found = self
            .bounded("find_one", collection, target.find_one(encoded, None))
            .await?;
        Ok(found.map(from_bson_document))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Document>, DomainError> {
        let encoded = to_bson_document(filter.as_document());
        let target = self.collection(collection);

        let found = self
            .bounded("find_many", collection, async move {
                let cursor = target.find(encoded, None).await?;
                cursor.try_collect::<Vec<_>>().await
            })
            .await?;
        Ok(found.into_iter().map(from_bson_document).collect())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> Result<u64, DomainError> {
        if patch.is_empty() {
            // `$set` with no fields is rejected by the server
            return Ok(self.find_one(collection, filter).await?.map_or(0, |_| 1));
        }

        let encoded = to_bson_document(filter.as_document());
        let update = doc! { "$set": to_bson_document(patch.as_document()) };
        let target = self.collection(collection);

        let result = self
            .bounded("update_one", collection, target.update_one(encoded, update, None))
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, DomainError> {
        let encoded = to_bson_document(filter.as_document());
        let target = self.collection(collection);

        let result = self
            .bounded("delete_one", collection, target.delete_one(encoded, None))
            .await?;
        Ok(result.deleted_count)
    }
}
