//! Order assembly and order queries

mod service;

#[cfg(test)]
mod tests;

pub use service::{parse_order_id, OrderService};
