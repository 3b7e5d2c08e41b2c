//! MongoDB-backed `ClockInRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use tracing::debug;

use crate::domain::ports::{ClockInRepository, ClockInRepositoryError, UpdateOutcome};
use crate::domain::{ClockInDraft, ClockInFilter, ClockInRecord, DocumentId, NewClockIn};

use super::documents::{ClockInDocument, from_object_id, to_object_id};
use super::filters::{clock_in_filter, clock_in_update};
use super::gateway::MongoGateway;

/// Clock-in repository over the `clock_in` collection.
#[derive(Clone)]
pub struct MongoClockInRepository {
    collection: Collection<ClockInDocument>,
}

impl MongoClockInRepository {
    /// Create a repository using the gateway's clock-in collection.
    pub fn new(gateway: &MongoGateway) -> Self {
        Self {
            collection: gateway.clock_in(),
        }
    }
}

#[async_trait]
impl ClockInRepository for MongoClockInRepository {
    async fn insert(&self, record: &NewClockIn) -> Result<DocumentId, ClockInRepositoryError> {
        let result = self
            .collection
            .insert_one(ClockInDocument::from(record))
            .await?;
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            ClockInRepositoryError::decode(format!(
                "store returned non-ObjectId key {}",
                result.inserted_id
            ))
        })?;
        Ok(from_object_id(Some(oid))?)
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ClockInRecord>, ClockInRepositoryError> {
        let oid = to_object_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        document
            .map(ClockInRecord::try_from)
            .transpose()
            .map_err(ClockInRepositoryError::from)
    }

    async fn list(
        &self,
        filter: &ClockInFilter,
        limit: usize,
    ) -> Result<Vec<ClockInRecord>, ClockInRepositoryError> {
        let query = clock_in_filter(filter);
        debug!(filter = %query, limit, "listing clock-in records");
        let documents: Vec<ClockInDocument> = self
            .collection
            .find(query)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;
        documents
            .into_iter()
            .map(|document| {
                ClockInRecord::try_from(document).map_err(ClockInRepositoryError::from)
            })
            .collect()
    }

    async fn update(
        &self,
        id: &DocumentId,
        draft: &ClockInDraft,
    ) -> Result<UpdateOutcome, ClockInRepositoryError> {
        let oid = to_object_id(id)?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, clock_in_update(draft))
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &DocumentId) -> Result<u64, ClockInRepositoryError> {
        let oid = to_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count)
    }
}
