//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters;
//! driven ports (`*Repository`) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod clock_in_command;
mod clock_in_query;
mod clock_in_repository;
mod item_command;
mod item_query;
mod item_repository;
mod update_outcome;

#[cfg(test)]
pub use clock_in_command::MockClockInCommand;
pub use clock_in_command::ClockInCommand;
#[cfg(test)]
pub use clock_in_query::MockClockInQuery;
pub use clock_in_query::ClockInQuery;
#[cfg(test)]
pub use clock_in_repository::MockClockInRepository;
pub use clock_in_repository::{ClockInRepository, ClockInRepositoryError};
#[cfg(test)]
pub use item_command::MockItemCommand;
pub use item_command::ItemCommand;
#[cfg(test)]
pub use item_query::MockItemQuery;
pub use item_query::ItemQuery;
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
pub use update_outcome::UpdateOutcome;
