//! MongoDB persistence adapters.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by a MongoDB database through the official async driver.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   BSON documents and domain types. No business logic resides here.
//! - **Internal documents**: Document structs (`documents.rs`) and query
//!   builders (`filters.rs`) are implementation details, never exposed to the
//!   domain layer.
//! - **Shared client**: One [`MongoGateway`] owns the driver's internal
//!   connection pool; repositories hold cheap collection handles.
//! - **Strongly typed errors**: Driver errors are mapped to the repository
//!   port error types.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{GatewayConfig, MongoGateway, MongoItemRepository};
//!
//! let gateway = MongoGateway::connect(GatewayConfig::new(url, "inventory_system")).await?;
//! let repo = MongoItemRepository::new(&gateway);
//! ```

mod documents;
mod error_mapping;
mod filters;
mod gateway;
mod mongo_clock_in_repository;
mod mongo_item_repository;

pub use documents::{ClockInDocument, DocumentDecodeError, ItemDocument};
pub use gateway::{
    CLOCK_IN_COLLECTION, GatewayConfig, GatewayError, ITEMS_COLLECTION, MongoGateway,
};
pub use mongo_clock_in_repository::MongoClockInRepository;
pub use mongo_item_repository::MongoItemRepository;
