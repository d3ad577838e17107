//! Domain entities representing core business objects.

pub mod order;
pub mod product;
pub mod token;
pub mod user;

pub use order::{is_known_status, Order, OrderItem, KNOWN_ORDER_STATUSES, ORDER_STATUS_PENDING};
pub use product::Product;
pub use token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
pub use user::User;

#[cfg(test)]
mod tests;
