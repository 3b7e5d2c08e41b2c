//! Shared mapping from driver failures to repository port errors.

use mongodb::error::{Error as MongoError, ErrorKind};

use crate::domain::ports::{ClockInRepositoryError, ItemRepositoryError};

use super::documents::DocumentDecodeError;

/// Coarse classification of a driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureClass {
    /// No usable server or the connection dropped.
    Connection,
    /// A returned document did not match the expected shape.
    Decode,
    /// Anything else the server or driver rejected.
    Query,
}

pub(crate) fn classify(error: &MongoError) -> FailureClass {
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::DnsResolve { .. } => FailureClass::Connection,
        ErrorKind::BsonDeserialization(_) => FailureClass::Decode,
        _ => FailureClass::Query,
    }
}

impl From<MongoError> for ItemRepositoryError {
    fn from(error: MongoError) -> Self {
        let message = error.to_string();
        match classify(&error) {
            FailureClass::Connection => Self::connection(message),
            FailureClass::Decode => Self::decode(message),
            FailureClass::Query => Self::query(message),
        }
    }
}

impl From<MongoError> for ClockInRepositoryError {
    fn from(error: MongoError) -> Self {
        let message = error.to_string();
        match classify(&error) {
            FailureClass::Connection => Self::connection(message),
            FailureClass::Decode => Self::decode(message),
            FailureClass::Query => Self::query(message),
        }
    }
}

impl From<DocumentDecodeError> for ItemRepositoryError {
    fn from(error: DocumentDecodeError) -> Self {
        Self::decode(error.to_string())
    }
}

impl From<DocumentDecodeError> for ClockInRepositoryError {
    fn from(error: DocumentDecodeError) -> Self {
        Self::decode(error.to_string())
    }
}
