//! Index bootstrap for the storefront collections

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};

use ec_core::repositories::{ORDERS_COLLECTION, PRODUCTS_COLLECTION, USERS_COLLECTION};

use crate::InfrastructureError;

struct IndexSpec {
    collection: &'static str,
    keys: Document,
    unique: bool,
}

fn index_specs() -> Vec<IndexSpec> {
    vec![
        IndexSpec {
            collection: USERS_COLLECTION,
            keys: doc! { "email": 1 },
            unique: true,
        },
        IndexSpec {
            collection: PRODUCTS_COLLECTION,
            keys: doc! { "name": 1 },
            unique: false,
        },
        IndexSpec {
            collection: PRODUCTS_COLLECTION,
            keys: doc! { "category": 1 },
            unique: false,
        },
        IndexSpec {
            collection: ORDERS_COLLECTION,
            keys: doc! { "user_id": 1 },
            unique: false,
        },
        IndexSpec {
            collection: ORDERS_COLLECTION,
            keys: doc! { "status": 1 },
            unique: false,
        },
        IndexSpec {
            collection: ORDERS_COLLECTION,
            keys: doc! { "created_at": -1 },
            unique: false,
        },
    ]
}

/// Create the collection indexes; existing identical indexes are left alone
///
/// The unique index on `users.email` is what makes concurrent registrations
/// of one address end in a single account.
pub async fn ensure_indexes(database: &Database) -> Result<(), InfrastructureError> {
    for spec in index_specs() {
        let model = IndexModel::builder()
            .keys(spec.keys.clone())
            .options(IndexOptions::builder().unique(spec.unique).build())
            .build();

        let created = database
            .collection::<Document>(spec.collection)
            .create_index(model, None)
            .await?;
        tracing::debug!(collection = spec.collection, index = %created.index_name, "Index ensured");
    }

    tracing::info!("Collection indexes ensured");
    Ok(())
}
