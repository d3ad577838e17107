//! Product entity from the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductDraft, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_draft(draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: draft.name.trim().to_string(),
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields, keeping identity and creation time
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name.trim().to_string();
        self.description = draft.description;
        self.price = draft.price;
        self.stock = draft.stock;
        self.category = draft.category;
        self.updated_at = Utc::now();
    }
}
