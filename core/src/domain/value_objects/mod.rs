//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod cart;
pub mod product_draft;
pub mod record_id;
pub mod user_profile;

pub use auth_response::{AccessToken, AuthenticatedUser};
pub use cart::CartLine;
pub use product_draft::ProductDraft;
pub use record_id::{RecordId, RecordIdError};
pub use user_profile::{LoginCredentials, RegisterUser, UserProfile};
