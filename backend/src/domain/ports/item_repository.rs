//! Port for inventory item persistence.
//!
//! The [`ItemRepository`] trait defines the contract for storing, querying,
//! and aggregating items. Adapters implement it against a document store;
//! tests substitute mocks or in-memory doubles.

use async_trait::async_trait;

use crate::domain::{DocumentId, EmailItemCount, Item, ItemDraft, ItemFilter, NewItem};

use super::{UpdateOutcome, define_port_error};

define_port_error! {
    /// Errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "item repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "item repository query failed: {message}",
        /// A stored document could not be mapped onto the domain model.
        Decode { message: String } =>
            "item document could not be decoded: {message}",
    }
}

/// Port for item storage and retrieval.
///
/// Single-document writes are atomic; nothing spans documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return the identifier the store generated.
    async fn insert(&self, item: &NewItem) -> Result<DocumentId, ItemRepositoryError>;

    /// Fetch an item by identifier; `None` when no document matches.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Item>, ItemRepositoryError>;

    /// List items matching every predicate of `filter`, in store order,
    /// returning at most `limit` items.
    async fn list(
        &self,
        filter: &ItemFilter,
        limit: usize,
    ) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Count items grouped by email, returning at most `limit` groups.
    async fn count_by_email(
        &self,
        limit: usize,
    ) -> Result<Vec<EmailItemCount>, ItemRepositoryError>;

    /// Overwrite the client-writable fields of the item named by `id`.
    ///
    /// The creation timestamp is never written.
    async fn update(
        &self,
        id: &DocumentId,
        draft: &ItemDraft,
    ) -> Result<UpdateOutcome, ItemRepositoryError>;

    /// Remove the item named by `id`, returning how many documents were deleted.
    async fn delete(&self, id: &DocumentId) -> Result<u64, ItemRepositoryError>;
}
