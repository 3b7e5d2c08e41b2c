//! BSON document shapes stored in the inventory collections.
//!
//! These are internal to the persistence adapters. Emails are stored as plain
//! strings so documents written by other clients still decode; validation
//! happens when mapping onto domain types.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::{
    ClockInRecord, DocumentId, EmailAddress, Item, NewClockIn, NewItem,
};

/// Reasons a stored document cannot be mapped onto a domain type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentDecodeError {
    #[error("document has no _id")]
    MissingId,
    #[error("document id {id} is not valid: {message}")]
    InvalidId { id: String, message: String },
    #[error("document email {email:?} is not valid: {message}")]
    InvalidEmail { email: String, message: String },
    #[error("timestamp {millis}ms is out of range")]
    TimestampOutOfRange { millis: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    pub expiry_date: String,
    pub insert_date: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub location: String,
    pub insert_datetime: DateTime,
}

/// One row of the per-email aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct EmailCountDocument {
    #[serde(rename = "_id")]
    pub email: Option<String>,
    pub count: i64,
}

pub(crate) fn to_bson_datetime(value: ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: DateTime) -> Result<ChronoDateTime<Utc>, DocumentDecodeError> {
    let millis = value.timestamp_millis();
    ChronoDateTime::from_timestamp_millis(millis)
        .ok_or(DocumentDecodeError::TimestampOutOfRange { millis })
}

pub(crate) fn to_object_id(id: &DocumentId) -> Result<ObjectId, DocumentDecodeError> {
    ObjectId::parse_str(id.as_ref()).map_err(|err| DocumentDecodeError::InvalidId {
        id: id.to_string(),
        message: err.to_string(),
    })
}

pub(crate) fn from_object_id(id: Option<ObjectId>) -> Result<DocumentId, DocumentDecodeError> {
    let hex = id.ok_or(DocumentDecodeError::MissingId)?.to_hex();
    DocumentId::new(&hex).map_err(|err| DocumentDecodeError::InvalidId {
        id: hex,
        message: err.to_string(),
    })
}

fn decode_email(email: String) -> Result<EmailAddress, DocumentDecodeError> {
    EmailAddress::new(email.clone()).map_err(|err| DocumentDecodeError::InvalidEmail {
        email,
        message: err.to_string(),
    })
}

impl From<&NewItem> for ItemDocument {
    fn from(value: &NewItem) -> Self {
        let draft = &value.draft;
        Self {
            id: None,
            name: draft.name.clone(),
            email: draft.email.to_string(),
            item_name: draft.item_name.clone(),
            quantity: draft.quantity,
            expiry_date: draft.expiry_date.clone(),
            insert_date: to_bson_datetime(value.insert_date),
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = DocumentDecodeError;

    fn try_from(value: ItemDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: from_object_id(value.id)?,
            name: value.name,
            email: decode_email(value.email)?,
            item_name: value.item_name,
            quantity: value.quantity,
            expiry_date: value.expiry_date,
            insert_date: from_bson_datetime(value.insert_date)?,
        })
    }
}

impl From<&NewClockIn> for ClockInDocument {
    fn from(value: &NewClockIn) -> Self {
        Self {
            id: None,
            email: value.draft.email.to_string(),
            location: value.draft.location.clone(),
            insert_datetime: to_bson_datetime(value.insert_datetime),
        }
    }
}

impl TryFrom<ClockInDocument> for ClockInRecord {
    type Error = DocumentDecodeError;

    fn try_from(value: ClockInDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: from_object_id(value.id)?,
            email: decode_email(value.email)?,
            location: value.location,
            insert_datetime: from_bson_datetime(value.insert_datetime)?,
        })
    }
}
