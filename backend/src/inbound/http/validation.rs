//! Shared validation helpers for inbound HTTP adapters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::json;

use crate::domain::{DocumentId, EmailAddress, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidEmail,
    InvalidId,
    InvalidTimestamp,
    InvalidInteger,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn invalid_email_error(field: FieldName, value: &str, reason: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} is not valid: {reason}"))
        .with_value(ErrorCode::InvalidEmail, value)
}

pub(crate) fn parse_email(value: String, field: FieldName) -> Result<EmailAddress, Error> {
    EmailAddress::new(value.clone())
        .map_err(|err| invalid_email_error(field, &value, &err.to_string()))
}

pub(crate) fn invalid_id_error(value: &str) -> Error {
    ValidationError::new("id", "id must be a 24 character hexadecimal string")
        .with_value(ErrorCode::InvalidId, value)
}

pub(crate) fn parse_document_id(value: &str) -> Result<DocumentId, Error> {
    DocumentId::new(value).map_err(|_| invalid_id_error(value))
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an ISO-8601 timestamp"))
        .with_value(ErrorCode::InvalidTimestamp, value)
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a naive date-time (separated by `T` or a
/// space, optional fractional seconds) taken as UTC, or a bare date taken as
/// midnight UTC.
pub(crate) fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn parse_optional_timestamp(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, Error> {
    non_empty(value)
        .map(|raw| parse_iso_timestamp(&raw).ok_or_else(|| invalid_timestamp_error(field, &raw)))
        .transpose()
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

/// Treat an empty query value as absent.
///
/// Known defect kept for compatibility: clients cannot filter on an empty
/// string.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.is_empty())
}

/// Parse an integer lower bound, treating `0` (and empty) as absent.
///
/// Known defect kept for compatibility: `quantity=0` does not filter out
/// negative quantities.
pub(crate) fn parse_nonzero_bound(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<i64>, Error> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };
    let parsed = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_integer_error(field, &raw))?;
    Ok((parsed != 0).then_some(parsed))
}
