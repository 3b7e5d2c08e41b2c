//! MongoDB-backed `ItemRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, doc};
use tracing::debug;

use crate::domain::ports::{ItemRepository, ItemRepositoryError, UpdateOutcome};
use crate::domain::{DocumentId, EmailItemCount, Item, ItemDraft, ItemFilter, NewItem};

use super::documents::{EmailCountDocument, ItemDocument, from_object_id, to_object_id};
use super::filters::{count_by_email_pipeline, item_filter, item_update};
use super::gateway::MongoGateway;

/// Item repository over the `items` collection.
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a repository using the gateway's items collection.
    pub fn new(gateway: &MongoGateway) -> Self {
        Self {
            collection: gateway.items(),
        }
    }
}

fn decode_count(row: bson::Document) -> Result<EmailItemCount, ItemRepositoryError> {
    let row: EmailCountDocument = bson::from_document(row)
        .map_err(|err| ItemRepositoryError::decode(err.to_string()))?;
    let count = u64::try_from(row.count)
        .map_err(|_| ItemRepositoryError::decode(format!("negative count {}", row.count)))?;
    Ok(EmailItemCount {
        email: row.email.unwrap_or_default(),
        count,
    })
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    async fn insert(&self, item: &NewItem) -> Result<DocumentId, ItemRepositoryError> {
        let result = self.collection.insert_one(ItemDocument::from(item)).await?;
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemRepositoryError::decode(format!(
                "store returned non-ObjectId key {}",
                result.inserted_id
            ))
        })?;
        Ok(from_object_id(Some(oid))?)
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Item>, ItemRepositoryError> {
        let oid = to_object_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        document
            .map(Item::try_from)
            .transpose()
            .map_err(ItemRepositoryError::from)
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        limit: usize,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let query = item_filter(filter);
        debug!(filter = %query, limit, "listing items");
        let documents: Vec<ItemDocument> = self
            .collection
            .find(query)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;
        documents
            .into_iter()
            .map(|document| Item::try_from(document).map_err(ItemRepositoryError::from))
            .collect()
    }

    async fn count_by_email(
        &self,
        limit: usize,
    ) -> Result<Vec<EmailItemCount>, ItemRepositoryError> {
        let rows: Vec<bson::Document> = self
            .collection
            .aggregate(count_by_email_pipeline(limit))
            .await?
            .try_collect()
            .await?;
        rows.into_iter().map(decode_count).collect()
    }

    async fn update(
        &self,
        id: &DocumentId,
        draft: &ItemDraft,
    ) -> Result<UpdateOutcome, ItemRepositoryError> {
        let oid = to_object_id(id)?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, item_update(draft))
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &DocumentId) -> Result<u64, ItemRepositoryError> {
        let oid = to_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(doc! { "_id": "a@x.com", "count": 2_i32 }, "a@x.com", 2)]
    #[case(doc! { "_id": "b@x.com", "count": 7_i64 }, "b@x.com", 7)]
    #[case(doc! { "_id": null, "count": 1_i32 }, "", 1)]
    fn aggregation_rows_decode(
        #[case] row: bson::Document,
        #[case] email: &str,
        #[case] count: u64,
    ) {
        let decoded = decode_count(row).expect("decode");
        assert_eq!(decoded.email, email);
        assert_eq!(decoded.count, count);
    }

    #[rstest]
    fn negative_counts_are_rejected() {
        let error = decode_count(doc! { "_id": "a@x.com", "count": -1_i64 }).expect_err("negative");
        assert!(matches!(error, ItemRepositoryError::Decode { .. }));
    }
}
