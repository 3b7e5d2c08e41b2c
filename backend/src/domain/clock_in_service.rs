//! Clock-in domain service implementing the clock-in driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ClockInCommand, ClockInQuery, ClockInRepository, ClockInRepositoryError,
};
use crate::domain::{
    ClockInDraft, ClockInFilter, ClockInRecord, DocumentId, Error, LIST_LIMIT, NewClockIn,
    SERVICE_UNAVAILABLE_MESSAGE,
};

/// Message returned when no clock-in record matches an identifier.
pub const CLOCK_IN_NOT_FOUND: &str = "Clock-in record not found";

/// Clock-in service implementing [`ClockInCommand`] and [`ClockInQuery`].
#[derive(Clone)]
pub struct ClockInService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ClockInService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(error: ClockInRepositoryError) -> Error {
    match error {
        ClockInRepositoryError::Connection { message } => {
            error!(%message, "clock-in repository unavailable");
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        ClockInRepositoryError::Query { message } => {
            Error::internal(format!("clock-in repository error: {message}"))
        }
        ClockInRepositoryError::Decode { message } => {
            Error::internal(format!("stored clock-in record is invalid: {message}"))
        }
    }
}

impl<R> ClockInService<R>
where
    R: ClockInRepository,
{
    async fn find(&self, id: &DocumentId) -> Result<Option<ClockInRecord>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ClockInCommand for ClockInService<R>
where
    R: ClockInRepository,
{
    async fn create(&self, draft: ClockInDraft) -> Result<ClockInRecord, Error> {
        let record = NewClockIn {
            draft,
            insert_datetime: self.clock.utc(),
        };
        let id = self
            .repo
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        info!(clock_in_id = %id, "clock-in recorded");

        self.find(&id).await?.ok_or_else(|| {
            warn!(clock_in_id = %id, "created clock-in vanished before read-back");
            Error::internal("created clock-in record could not be read back")
        })
    }

    /// A no-op update (identical values) is reported as `NotFound`, matching
    /// the item endpoint.
    async fn update(&self, id: &DocumentId, draft: ClockInDraft) -> Result<ClockInRecord, Error> {
        let outcome = self
            .repo
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?;
        if outcome.modified == 0 {
            return Err(Error::not_found(CLOCK_IN_NOT_FOUND));
        }
        self.find(id)
            .await?
            .ok_or_else(|| Error::not_found(CLOCK_IN_NOT_FOUND))
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), Error> {
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted == 1 {
            info!(clock_in_id = %id, "clock-in deleted");
            Ok(())
        } else {
            Err(Error::not_found(CLOCK_IN_NOT_FOUND))
        }
    }
}

#[async_trait]
impl<R> ClockInQuery for ClockInService<R>
where
    R: ClockInRepository,
{
    async fn get(&self, id: &DocumentId) -> Result<ClockInRecord, Error> {
        self.find(id)
            .await?
            .ok_or_else(|| Error::not_found(CLOCK_IN_NOT_FOUND))
    }

    async fn filter(&self, filter: ClockInFilter) -> Result<Vec<ClockInRecord>, Error> {
        self.repo
            .list(&filter, LIST_LIMIT)
            .await
            .map_err(map_repository_error)
    }
}
