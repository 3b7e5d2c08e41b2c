//! Driving port for clock-in mutations.

use async_trait::async_trait;

use crate::domain::{ClockInDraft, ClockInRecord, DocumentId, Error};

/// Domain use-case port for clock-in mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClockInCommand: Send + Sync {
    /// Store a new record stamped with the current time and return it as stored.
    async fn create(&self, draft: ClockInDraft) -> Result<ClockInRecord, Error>;

    /// Overwrite the client-writable fields of a record and return it as stored.
    async fn update(&self, id: &DocumentId, draft: ClockInDraft) -> Result<ClockInRecord, Error>;

    /// Hard-delete a record.
    async fn delete(&self, id: &DocumentId) -> Result<(), Error>;
}
