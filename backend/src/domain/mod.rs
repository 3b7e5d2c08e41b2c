//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed inventory and attendance entities used by
//! the HTTP and persistence adapters. Keep types immutable and document
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Item / ClockInRecord: stored documents with store-generated ids.
//! - ItemService / ClockInService: driving port implementations.

pub mod clock_in;
pub mod clock_in_service;
pub mod document_id;
pub mod email;
pub mod error;
pub mod item;
pub mod item_service;
pub mod ports;
pub mod trace_id;

pub use self::clock_in::{ClockInDraft, ClockInFilter, ClockInRecord, NewClockIn};
pub use self::clock_in_service::{CLOCK_IN_NOT_FOUND, ClockInService};
pub use self::document_id::{DOCUMENT_ID_LEN, DocumentId, DocumentIdValidationError};
pub use self::email::{EMAIL_MAX, EmailAddress, EmailValidationError};
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, INTERNAL_ERROR_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE,
    TRACE_ID_HEADER,
};
pub use self::item::{EmailItemCount, Item, ItemDraft, ItemFilter, LIST_LIMIT, NewItem};
pub use self::item_service::{ITEM_NOT_FOUND, ItemService};
pub use self::trace_id::TraceId;
