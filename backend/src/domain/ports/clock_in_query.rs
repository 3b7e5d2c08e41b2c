//! Driving port for clock-in reads.

use async_trait::async_trait;

use crate::domain::{ClockInFilter, ClockInRecord, DocumentId, Error};

/// Domain use-case port for clock-in reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClockInQuery: Send + Sync {
    /// Fetch one record by identifier.
    async fn get(&self, id: &DocumentId) -> Result<ClockInRecord, Error>;

    /// List records matching `filter`, capped at [`crate::domain::LIST_LIMIT`].
    async fn filter(&self, filter: ClockInFilter) -> Result<Vec<ClockInRecord>, Error>;
}
