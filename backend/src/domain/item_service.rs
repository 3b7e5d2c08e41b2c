//! Inventory item domain service.
//!
//! Implements the item driving ports over an [`ItemRepository`]. The service
//! owns the server-assigned creation timestamp and the translation of store
//! outcomes into `NotFound` errors.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{ItemCommand, ItemQuery, ItemRepository, ItemRepositoryError};
use crate::domain::{
    DocumentId, EmailItemCount, Error, Item, ItemDraft, ItemFilter, LIST_LIMIT, NewItem,
    SERVICE_UNAVAILABLE_MESSAGE,
};

/// Message returned when no item matches an identifier.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Item service implementing [`ItemCommand`] and [`ItemQuery`].
#[derive(Clone)]
pub struct ItemService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ItemService<R> {
    /// Create a new service over the given repository and clock.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use backend::domain::ItemService;
    /// # use backend::outbound::persistence::{MongoGateway, MongoItemRepository};
    /// # async fn example(gateway: MongoGateway) {
    /// let service = ItemService::new(
    ///     Arc::new(MongoItemRepository::new(&gateway)),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(error: ItemRepositoryError) -> Error {
    match error {
        ItemRepositoryError::Connection { message } => {
            error!(%message, "item repository unavailable");
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        ItemRepositoryError::Query { message } => {
            Error::internal(format!("item repository error: {message}"))
        }
        ItemRepositoryError::Decode { message } => {
            Error::internal(format!("stored item is invalid: {message}"))
        }
    }
}

impl<R> ItemService<R>
where
    R: ItemRepository,
{
    async fn find(&self, id: &DocumentId) -> Result<Option<Item>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ItemCommand for ItemService<R>
where
    R: ItemRepository,
{
    async fn create(&self, draft: ItemDraft) -> Result<Item, Error> {
        let new_item = NewItem {
            draft,
            insert_date: self.clock.utc(),
        };
        let id = self
            .repo
            .insert(&new_item)
            .await
            .map_err(map_repository_error)?;
        info!(item_id = %id, "item created");

        // Insert and read-back are separate operations; a concurrent delete
        // can remove the document in between.
        self.find(&id).await?.ok_or_else(|| {
            warn!(item_id = %id, "created item vanished before read-back");
            Error::internal("created item could not be read back")
        })
    }

    /// Known defect kept for compatibility: an update whose values equal the
    /// stored values modifies nothing and is reported as `NotFound`.
    async fn update(&self, id: &DocumentId, draft: ItemDraft) -> Result<Item, Error> {
        let outcome = self
            .repo
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?;
        if outcome.modified == 0 {
            return Err(Error::not_found(ITEM_NOT_FOUND));
        }
        self.find(id)
            .await?
            .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), Error> {
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted == 1 {
            info!(item_id = %id, "item deleted");
            Ok(())
        } else {
            Err(Error::not_found(ITEM_NOT_FOUND))
        }
    }
}

#[async_trait]
impl<R> ItemQuery for ItemService<R>
where
    R: ItemRepository,
{
    async fn get(&self, id: &DocumentId) -> Result<Item, Error> {
        self.find(id)
            .await?
            .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))
    }

    async fn filter(&self, filter: ItemFilter) -> Result<Vec<Item>, Error> {
        self.repo
            .list(&filter, LIST_LIMIT)
            .await
            .map_err(map_repository_error)
    }

    async fn count_by_email(&self) -> Result<Vec<EmailItemCount>, Error> {
        self.repo
            .count_by_email(LIST_LIMIT)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "item_service_tests.rs"]
mod tests;
