//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ClockInCommand, ClockInQuery, ItemCommand, ItemQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemCommand>,
    pub items_query: Arc<dyn ItemQuery>,
    pub clock_in: Arc<dyn ClockInCommand>,
    pub clock_in_query: Arc<dyn ClockInQuery>,
}

impl HttpState {
    /// Construct state from the driving port implementations.
    ///
    /// A single service usually implements both the command and query port of
    /// a resource, so the same `Arc` is passed twice.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{ClockInService, ItemService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::test_support::{FixtureClock, InMemoryClockInRepository, InMemoryItemRepository};
    ///
    /// let items = Arc::new(ItemService::new(
    ///     Arc::new(InMemoryItemRepository::default()),
    ///     Arc::new(FixtureClock),
    /// ));
    /// let clock_in = Arc::new(ClockInService::new(
    ///     Arc::new(InMemoryClockInRepository::default()),
    ///     Arc::new(FixtureClock),
    /// ));
    /// let state = HttpState::new(items.clone(), items, clock_in.clone(), clock_in);
    /// let _items = state.items.clone();
    /// ```
    pub fn new(
        items: Arc<dyn ItemCommand>,
        items_query: Arc<dyn ItemQuery>,
        clock_in: Arc<dyn ClockInCommand>,
        clock_in_query: Arc<dyn ClockInQuery>,
    ) -> Self {
        Self {
            items,
            items_query,
            clock_in,
            clock_in_query,
        }
    }
}
