//! Clock-in record HTTP handlers.
//!
//! ```text
//! POST   /clock-in
//! GET    /clock-in/filter?email&location&insert_datetime
//! GET    /clock-in/{id}
//! PUT    /clock-in/{id}
//! DELETE /clock-in/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ClockInDraft, ClockInFilter, ClockInRecord, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::items::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, non_empty, parse_document_id, parse_email, parse_optional_timestamp, require,
};

/// Message returned after a successful clock-in delete.
pub const CLOCK_IN_DELETED: &str = "Clock-in record deleted successfully";

/// Request payload for creating or replacing a clock-in record.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ClockInRequest {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Leeds")]
    pub location: Option<String>,
}

/// Response payload for a stored clock-in record.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ClockInResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    pub email: String,
    pub location: String,
    /// RFC 3339 creation timestamp.
    #[schema(example = "2024-03-01T08:30:00+00:00")]
    pub insert_datetime: String,
}

impl From<ClockInRecord> for ClockInResponse {
    fn from(value: ClockInRecord) -> Self {
        Self {
            id: value.id.to_string(),
            email: value.email.to_string(),
            location: value.location,
            insert_datetime: value.insert_datetime.to_rfc3339(),
        }
    }
}

/// Query parameters for listing clock-in records.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClockInFilterQuery {
    /// Exact email match.
    pub email: Option<String>,
    /// Exact location match.
    pub location: Option<String>,
    /// ISO-8601 lower bound on `insert_datetime`.
    pub insert_datetime: Option<String>,
}

const EMAIL: FieldName = FieldName::new("email");
const LOCATION: FieldName = FieldName::new("location");
const INSERT_DATETIME: FieldName = FieldName::new("insert_datetime");

fn parse_clock_in_request(payload: ClockInRequest) -> Result<ClockInDraft, Error> {
    let email = require(payload.email, EMAIL)?;
    let location = require(payload.location, LOCATION)?;
    Ok(ClockInDraft {
        email: parse_email(email, EMAIL)?,
        location,
    })
}

fn parse_clock_in_filter(query: ClockInFilterQuery) -> Result<ClockInFilter, Error> {
    Ok(ClockInFilter {
        email: non_empty(query.email),
        location: non_empty(query.location),
        inserted_from: parse_optional_timestamp(query.insert_datetime, INSERT_DATETIME)?,
    })
}

/// Record a clock-in stamped with the current server time.
#[utoipa::path(
    post,
    path = "/clock-in",
    request_body = ClockInRequest,
    responses(
        (status = 200, description = "Stored record", body = ClockInResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["clock-in"],
    operation_id = "createClockIn"
)]
#[post("/clock-in")]
pub async fn create_clock_in(
    state: web::Data<HttpState>,
    payload: web::Json<ClockInRequest>,
) -> ApiResult<web::Json<ClockInResponse>> {
    let draft = parse_clock_in_request(payload.into_inner())?;
    let record = state.clock_in.create(draft).await?;
    Ok(web::Json(ClockInResponse::from(record)))
}

/// List clock-in records matching every supplied predicate, at most 1000.
#[utoipa::path(
    get,
    path = "/clock-in/filter",
    params(ClockInFilterQuery),
    responses(
        (status = 200, description = "Matching records", body = [ClockInResponse]),
        (status = 400, description = "Invalid query", body = ErrorSchema)
    ),
    tags = ["clock-in"],
    operation_id = "filterClockIn"
)]
#[get("/clock-in/filter")]
pub async fn filter_clock_in(
    state: web::Data<HttpState>,
    query: web::Query<ClockInFilterQuery>,
) -> ApiResult<web::Json<Vec<ClockInResponse>>> {
    let filter = parse_clock_in_filter(query.into_inner())?;
    let records = state.clock_in_query.filter(filter).await?;
    Ok(web::Json(
        records.into_iter().map(ClockInResponse::from).collect(),
    ))
}

/// Fetch one clock-in record.
#[utoipa::path(
    get,
    path = "/clock-in/{id}",
    params(("id" = String, Path, description = "24 hex digit record identifier")),
    responses(
        (status = 200, description = "Record", body = ClockInResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema)
    ),
    tags = ["clock-in"],
    operation_id = "getClockIn"
)]
#[get("/clock-in/{id}")]
pub async fn get_clock_in(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ClockInResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    let record = state.clock_in_query.get(&id).await?;
    Ok(web::Json(ClockInResponse::from(record)))
}

/// Replace the client-writable fields of a clock-in record.
///
/// Submitting the values already stored yields `404`, as for items.
#[utoipa::path(
    put,
    path = "/clock-in/{id}",
    params(("id" = String, Path, description = "24 hex digit record identifier")),
    request_body = ClockInRequest,
    responses(
        (status = 200, description = "Updated record", body = ClockInResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Record not found or unchanged", body = ErrorSchema)
    ),
    tags = ["clock-in"],
    operation_id = "updateClockIn"
)]
#[put("/clock-in/{id}")]
pub async fn update_clock_in(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ClockInRequest>,
) -> ApiResult<web::Json<ClockInResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    let draft = parse_clock_in_request(payload.into_inner())?;
    let record = state.clock_in.update(&id, draft).await?;
    Ok(web::Json(ClockInResponse::from(record)))
}

/// Hard-delete a clock-in record.
#[utoipa::path(
    delete,
    path = "/clock-in/{id}",
    params(("id" = String, Path, description = "24 hex digit record identifier")),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Record not found", body = ErrorSchema)
    ),
    tags = ["clock-in"],
    operation_id = "deleteClockIn"
)]
#[delete("/clock-in/{id}")]
pub async fn delete_clock_in(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    state.clock_in.delete(&id).await?;
    Ok(web::Json(MessageResponse {
        message: CLOCK_IN_DELETED.to_owned(),
    }))
}
