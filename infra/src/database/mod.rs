//! Database module - MongoDB implementations
//!
//! This module provides the database access layer:
//! - Client connection with startup ping
//! - The collection-backed document store
//! - Index bootstrap
//! - JSON/BSON document conversion

pub mod connection;
pub mod convert;
pub mod indexes;
pub mod store;


pub use connection::MongoConnection;
pub use indexes::ensure_indexes;
pub use store::MongoDocumentStore;

use mongodb::error::{ErrorKind, WriteFailure};

/// Server error code for a unique index violation
pub const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::BulkWrite(failure) => failure
            .write_errors
            .iter()
            .flatten()
            .any(|write_error| write_error.code == DUPLICATE_KEY_CODE),
        _ => false,
    }
}
