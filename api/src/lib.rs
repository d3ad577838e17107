//! HTTP surface of the storefront backend: routes, DTOs, JWT middleware,
//! CORS and JSON error mapping over the core services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
