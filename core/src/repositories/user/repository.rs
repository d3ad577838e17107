//! User repository over a document store

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::store::{from_document, to_document, DocumentStore, Filter};

use super::trait_::UserRepository;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

pub struct DocumentUserRepository<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> DocumentUserRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore> UserRepository for DocumentUserRepository<S> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let filter = Filter::new().eq("email", email);
        self.store
            .find_one(USERS_COLLECTION, &filter)
            .await?
            .map(from_document::<User>)
            .transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let filter = Filter::new().eq("email", email);
        Ok(self.store.find_one(USERS_COLLECTION, &filter).await?.is_some())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let document = to_document(&user)?;
        match self.store.insert(USERS_COLLECTION, document).await {
            Ok(_) => Ok(user),
            Err(DomainError::Conflict { .. }) => Err(AuthError::UserAlreadyExists.into()),
            Err(e) => Err(e),
        }
    }
}
