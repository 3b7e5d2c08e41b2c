//! In-memory repository adapters.
//!
//! These stand in for the document store in endpoint tests. Identifier
//! generation, update counters, filter evaluation, and list caps follow the
//! store's observable behaviour so handlers can be exercised end to end.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ClockInRepository, ClockInRepositoryError, ItemRepository, ItemRepositoryError,
    UpdateOutcome,
};
use crate::domain::{
    ClockInDraft, ClockInFilter, ClockInRecord, DocumentId, EmailItemCount, Item, ItemDraft,
    ItemFilter, NewClockIn, NewItem,
};

struct Collection<T, E> {
    next_id: u64,
    documents: Vec<T>,
    failure: Option<E>,
}

impl<T, E> Default for Collection<T, E> {
    fn default() -> Self {
        Self {
            next_id: 1,
            documents: Vec::new(),
            failure: None,
        }
    }
}

impl<T, E: Clone> Collection<T, E> {
    fn check(&self) -> Result<(), E> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn allocate_id(&mut self) -> Result<DocumentId, String> {
        let id = DocumentId::new(format!("{:024x}", self.next_id))
            .map_err(|error| error.to_string())?;
        self.next_id += 1;
        Ok(id)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(_) => panic!("in-memory repository mutex"),
    }
}

/// Item repository holding documents in insertion order.
#[derive(Default)]
pub struct InMemoryItemRepository {
    state: Mutex<Collection<Item, ItemRepositoryError>>,
}

impl InMemoryItemRepository {
    /// Make every subsequent call fail with `error`; `None` restores service.
    pub fn set_failure(&self, error: Option<ItemRepositoryError>) {
        lock(&self.state).failure = error;
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        lock(&self.state).documents.len()
    }

    /// Returns true when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, item: &NewItem) -> Result<DocumentId, ItemRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let id = state.allocate_id().map_err(ItemRepositoryError::query)?;
        let draft = item.draft.clone();
        state.documents.push(Item {
            id: id.clone(),
            name: draft.name,
            email: draft.email,
            item_name: draft.item_name,
            quantity: draft.quantity,
            expiry_date: draft.expiry_date,
            insert_date: item.insert_date,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Item>, ItemRepositoryError> {
        let state = lock(&self.state);
        state.check()?;
        Ok(state.documents.iter().find(|item| &item.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ItemFilter,
        limit: usize,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let state = lock(&self.state);
        state.check()?;
        Ok(state
            .documents
            .iter()
            .filter(|item| filter.matches(item))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_by_email(
        &self,
        limit: usize,
    ) -> Result<Vec<EmailItemCount>, ItemRepositoryError> {
        let state = lock(&self.state);
        state.check()?;
        let mut counts = BTreeMap::<String, u64>::new();
        for item in &state.documents {
            *counts.entry(item.email.to_string()).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .take(limit)
            .map(|(email, count)| EmailItemCount { email, count })
            .collect())
    }

    async fn update(
        &self,
        id: &DocumentId,
        draft: &ItemDraft,
    ) -> Result<UpdateOutcome, ItemRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let Some(item) = state.documents.iter_mut().find(|item| &item.id == id) else {
            return Ok(UpdateOutcome::missing());
        };
        let updated = Item {
            id: item.id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            item_name: draft.item_name.clone(),
            quantity: draft.quantity,
            expiry_date: draft.expiry_date.clone(),
            insert_date: item.insert_date,
        };
        if *item == updated {
            return Ok(UpdateOutcome::unchanged());
        }
        *item = updated;
        Ok(UpdateOutcome::modified_one())
    }

    async fn delete(&self, id: &DocumentId) -> Result<u64, ItemRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let before = state.documents.len();
        state.documents.retain(|item| &item.id != id);
        Ok((before - state.documents.len()) as u64)
    }
}

/// Clock-in repository holding records in insertion order.
#[derive(Default)]
pub struct InMemoryClockInRepository {
    state: Mutex<Collection<ClockInRecord, ClockInRepositoryError>>,
}

impl InMemoryClockInRepository {
    /// Make every subsequent call fail with `error`; `None` restores service.
    pub fn set_failure(&self, error: Option<ClockInRepositoryError>) {
        lock(&self.state).failure = error;
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        lock(&self.state).documents.len()
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ClockInRepository for InMemoryClockInRepository {
    async fn insert(&self, record: &NewClockIn) -> Result<DocumentId, ClockInRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let id = state.allocate_id().map_err(ClockInRepositoryError::query)?;
        state.documents.push(ClockInRecord {
            id: id.clone(),
            email: record.draft.email.clone(),
            location: record.draft.location.clone(),
            insert_datetime: record.insert_datetime,
        });
        Ok(id)
    }

    async fn find_by_id(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ClockInRecord>, ClockInRepositoryError> {
        let state = lock(&self.state);
        state.check()?;
        Ok(state.documents.iter().find(|record| &record.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ClockInFilter,
        limit: usize,
    ) -> Result<Vec<ClockInRecord>, ClockInRepositoryError> {
        let state = lock(&self.state);
        state.check()?;
        Ok(state
            .documents
            .iter()
            .filter(|record| filter.matches(record))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &DocumentId,
        draft: &ClockInDraft,
    ) -> Result<UpdateOutcome, ClockInRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let Some(record) = state.documents.iter_mut().find(|record| &record.id == id) else {
            return Ok(UpdateOutcome::missing());
        };
        if record.email == draft.email && record.location == draft.location {
            return Ok(UpdateOutcome::unchanged());
        }
        record.email = draft.email.clone();
        record.location = draft.location.clone();
        Ok(UpdateOutcome::modified_one())
    }

    async fn delete(&self, id: &DocumentId) -> Result<u64, ClockInRepositoryError> {
        let mut state = lock(&self.state);
        state.check()?;
        let before = state.documents.len();
        state.documents.retain(|record| &record.id != id);
        Ok((before - state.documents.len()) as u64)
    }
}
