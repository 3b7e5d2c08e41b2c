//! Driving port for item mutations.
//!
//! Inbound adapters use this port to create, update, and delete items
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{DocumentId, Error, Item, ItemDraft};

/// Domain use-case port for item mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemCommand: Send + Sync {
    /// Store a new item stamped with the current time and return it as stored.
    async fn create(&self, draft: ItemDraft) -> Result<Item, Error>;

    /// Overwrite the client-writable fields of an item and return it as stored.
    async fn update(&self, id: &DocumentId, draft: ItemDraft) -> Result<Item, Error>;

    /// Hard-delete an item.
    async fn delete(&self, id: &DocumentId) -> Result<(), Error>;
}
