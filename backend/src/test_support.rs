//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests or
//! when the `test-support` feature is enabled.

pub mod clock;
pub mod in_memory;

pub use clock::{FixtureClock, MutableClock, fixture_timestamp};
pub use in_memory::{InMemoryClockInRepository, InMemoryItemRepository};
