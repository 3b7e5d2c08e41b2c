//! Port for clock-in record persistence.

use async_trait::async_trait;

use crate::domain::{ClockInDraft, ClockInFilter, ClockInRecord, DocumentId, NewClockIn};

use super::{UpdateOutcome, define_port_error};

define_port_error! {
    /// Errors raised by clock-in repository adapters.
    pub enum ClockInRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "clock-in repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "clock-in repository query failed: {message}",
        /// A stored document could not be mapped onto the domain model.
        Decode { message: String } =>
            "clock-in document could not be decoded: {message}",
    }
}

/// Port for clock-in record storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClockInRepository: Send + Sync {
    /// Persist a new record and return the identifier the store generated.
    async fn insert(&self, record: &NewClockIn) -> Result<DocumentId, ClockInRepositoryError>;

    /// Fetch a record by identifier; `None` when no document matches.
    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ClockInRecord>, ClockInRepositoryError>;

    /// List records matching every predicate of `filter`, at most `limit`.
    async fn list(
        &self,
        filter: &ClockInFilter,
        limit: usize,
    ) -> Result<Vec<ClockInRecord>, ClockInRepositoryError>;

    /// Overwrite the client-writable fields of the record named by `id`.
    async fn update(
        &self,
        id: &DocumentId,
        draft: &ClockInDraft,
    ) -> Result<UpdateOutcome, ClockInRepositoryError>;

    /// Remove the record named by `id`, returning how many documents were deleted.
    async fn delete(&self, id: &DocumentId) -> Result<u64, ClockInRepositoryError>;
}
