//! Driving port for item reads.

use async_trait::async_trait;

use crate::domain::{DocumentId, EmailItemCount, Error, Item, ItemFilter};

/// Domain use-case port for item reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemQuery: Send + Sync {
    /// Fetch one item by identifier.
    async fn get(&self, id: &DocumentId) -> Result<Item, Error>;

    /// List items matching `filter`, capped at [`crate::domain::LIST_LIMIT`].
    async fn filter(&self, filter: ItemFilter) -> Result<Vec<Item>, Error>;

    /// Count items per submitter email across the whole collection.
    async fn count_by_email(&self) -> Result<Vec<EmailItemCount>, Error>;
}
