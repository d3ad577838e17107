//! Password hashing

mod hasher;

pub use hasher::{BcryptPasswordHasher, PasswordHasher};
