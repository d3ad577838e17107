//! User entity representing a registered storefront customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RecordId, UserProfile};

/// User entity as stored in the `users` collection
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Trimmed email, unique across users
    pub email: String,

    /// bcrypt hash; the plaintext is never stored
    #[serde(rename = "password")]
    pub password_hash: String,

    pub name: String,

    #[serde(default)]
    pub address: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: String, password_hash: String, name: String, address: String) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            email,
            password_hash,
            name,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public view without credential material
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            address: user.address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
