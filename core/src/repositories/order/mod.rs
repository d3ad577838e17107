pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod repository;

#[cfg(test)]
mod tests;

pub use r#trait::OrderRepository;
pub use repository::{DocumentOrderRepository, ORDERS_COLLECTION};
