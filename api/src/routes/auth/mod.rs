//! Authentication route handlers
//!
//! - `POST /api/auth/register` creates an identity
//! - `POST /api/auth/login` exchanges credentials for a bearer token

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
