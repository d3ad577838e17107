pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod codec;
pub mod filter;
pub mod memory;

pub use codec::{from_document, to_document};
pub use filter::{Filter, Patch};
pub use memory::MemoryDocumentStore;
pub use r#trait::{Document, DocumentStore, ID_FIELD};
