//! Entity <-> document conversion.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::DomainError;

use super::r#trait::Document;

pub fn to_document<T: Serialize>(value: &T) -> Result<Document, DomainError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(DomainError::internal(format!(
            "expected an object document, got {}",
            other
        ))),
        Err(e) => Err(DomainError::internal(format!("failed to encode document: {}", e))),
    }
}

pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, DomainError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| DomainError::storage(format!("malformed stored document: {}", e)))
}
