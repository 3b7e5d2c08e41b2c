//! Attendance (clock-in) record entities.

use chrono::{DateTime, Utc};

use crate::domain::{DocumentId, EmailAddress};

/// Client-writable clock-in fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockInDraft {
    /// Email of the person clocking in.
    pub email: EmailAddress,
    /// Free-text location.
    pub location: String,
}

/// Clock-in draft stamped with its creation time, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClockIn {
    /// Client-supplied fields.
    pub draft: ClockInDraft,
    /// Server-assigned creation time.
    pub insert_datetime: DateTime<Utc>,
}

/// Stored clock-in record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockInRecord {
    /// Store-generated identifier.
    pub id: DocumentId,
    /// Email of the person clocking in.
    pub email: EmailAddress,
    /// Free-text location.
    pub location: String,
    /// Creation time; never changes after insert.
    pub insert_datetime: DateTime<Utc>,
}

/// Predicates for listing clock-in records; every present predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockInFilter {
    /// Exact email match.
    pub email: Option<String>,
    /// Exact location match.
    pub location: Option<String>,
    /// Lower bound (inclusive) on `insert_datetime`.
    pub inserted_from: Option<DateTime<Utc>>,
}

impl ClockInFilter {
    /// Evaluate the filter against a record the same way the store does.
    pub fn matches(&self, record: &ClockInRecord) -> bool {
        self.email
            .as_deref()
            .is_none_or(|email| record.email.as_ref() == email)
            && self
                .location
                .as_deref()
                .is_none_or(|location| record.location == location)
            && self
                .inserted_from
                .is_none_or(|from| record.insert_datetime >= from)
    }
}
