//! Error types and MongoDB error classification.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

/// Server error code raised on a unique-index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Server error code raised when a command targets a collection that does
/// not exist (`NamespaceNotFound`).
const NAMESPACE_NOT_FOUND: i32 = 26;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to {uri}: {source}")]
    Connection { uri: String, source: MongoError },

    #[error("database error: {0}")]
    Mongo(#[from] MongoError),
}

/// Returns true if the error is a unique-index violation, either on a
/// single write or on any entry of an `insert_many` batch.
pub fn is_duplicate_key(err: &MongoError) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY,
        ErrorKind::InsertMany(insert) => insert
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY)),
        _ => false,
    }
}

/// Returns true if the error is the server's `NamespaceNotFound`, raised
/// for example when dropping a collection that does not exist.
pub fn is_namespace_not_found(err: &MongoError) -> bool {
    matches!(&*err.kind, ErrorKind::Command(command) if command.code == NAMESPACE_NOT_FOUND)
}
