//! Inventory item HTTP handlers.
//!
//! ```text
//! POST   /items
//! GET    /items/filter?email&expiry_date&insert_date&quantity
//! GET    /items/aggregate
//! GET    /items/{id}
//! PUT    /items/{id}
//! DELETE /items/{id}
//! ```
//!
//! `/items/filter` and `/items/aggregate` must be registered before
//! `/items/{id}` so the literal segments win.

use std::collections::BTreeMap;

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{EmailItemCount, Error, Item, ItemDraft, ItemFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, non_empty, parse_document_id, parse_email, parse_nonzero_bound,
    parse_optional_timestamp, require,
};

/// Message returned after a successful item delete.
pub const ITEM_DELETED: &str = "Item deleted successfully";

/// Request payload for creating or replacing an item.
///
/// Every field is required; they are optional here so a missing field is
/// reported by name rather than as a generic body error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ItemRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Widget")]
    pub item_name: Option<String>,
    #[schema(example = 5)]
    pub quantity: Option<i64>,
    #[schema(example = "2024-06-15")]
    pub expiry_date: Option<String>,
}

/// Response payload for a stored item.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    pub expiry_date: String,
    /// RFC 3339 creation timestamp.
    #[schema(example = "2024-01-10T12:00:00+00:00")]
    pub insert_date: String,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            email: value.email.to_string(),
            item_name: value.item_name,
            quantity: value.quantity,
            expiry_date: value.expiry_date,
            insert_date: value.insert_date.to_rfc3339(),
        }
    }
}

/// Query parameters for listing items.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemFilterQuery {
    /// Exact email match.
    pub email: Option<String>,
    /// Lexical lower bound on `expiry_date`.
    pub expiry_date: Option<String>,
    /// ISO-8601 lower bound on `insert_date`.
    pub insert_date: Option<String>,
    /// Lower bound on `quantity`; `0` is ignored.
    pub quantity: Option<String>,
}

/// Response payload for delete operations.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

/// Item counts keyed by submitter email.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
pub struct EmailCountsResponse(pub BTreeMap<String, u64>);

impl From<Vec<EmailItemCount>> for EmailCountsResponse {
    fn from(value: Vec<EmailItemCount>) -> Self {
        Self(
            value
                .into_iter()
                .map(|row| (row.email, row.count))
                .collect(),
        )
    }
}

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const ITEM_NAME: FieldName = FieldName::new("item_name");
const QUANTITY: FieldName = FieldName::new("quantity");
const EXPIRY_DATE: FieldName = FieldName::new("expiry_date");
const INSERT_DATE: FieldName = FieldName::new("insert_date");

fn parse_item_request(payload: ItemRequest) -> Result<ItemDraft, Error> {
    let name = require(payload.name, NAME)?;
    let email = require(payload.email, EMAIL)?;
    let item_name = require(payload.item_name, ITEM_NAME)?;
    let quantity = require(payload.quantity, QUANTITY)?;
    let expiry_date = require(payload.expiry_date, EXPIRY_DATE)?;

    Ok(ItemDraft {
        name,
        email: parse_email(email, EMAIL)?,
        item_name,
        quantity,
        expiry_date,
    })
}

fn parse_item_filter(query: ItemFilterQuery) -> Result<ItemFilter, Error> {
    Ok(ItemFilter {
        email: non_empty(query.email),
        expiry_date_from: non_empty(query.expiry_date),
        inserted_from: parse_optional_timestamp(query.insert_date, INSERT_DATE)?,
        min_quantity: parse_nonzero_bound(query.quantity, QUANTITY)?,
    })
}

/// Create an item stamped with the current server time.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Stored item", body = ItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<web::Json<ItemResponse>> {
    let draft = parse_item_request(payload.into_inner())?;
    let item = state.items.create(draft).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// List items matching every supplied predicate, at most 1000.
#[utoipa::path(
    get,
    path = "/items/filter",
    params(ItemFilterQuery),
    responses(
        (status = 200, description = "Matching items", body = [ItemResponse]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "filterItems"
)]
#[get("/items/filter")]
pub async fn filter_items(
    state: web::Data<HttpState>,
    query: web::Query<ItemFilterQuery>,
) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let filter = parse_item_filter(query.into_inner())?;
    let items = state.items_query.filter(filter).await?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Count items per submitter email.
#[utoipa::path(
    get,
    path = "/items/aggregate",
    responses(
        (status = 200, description = "Item count per email", body = EmailCountsResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "aggregateItems"
)]
#[get("/items/aggregate")]
pub async fn aggregate_items(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<EmailCountsResponse>> {
    let counts = state.items_query.count_by_email().await?;
    Ok(web::Json(EmailCountsResponse::from(counts)))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24 hex digit item identifier")),
    responses(
        (status = 200, description = "Item", body = ItemResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    let item = state.items_query.get(&id).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Replace the client-writable fields of an item.
///
/// Known defect kept for compatibility: submitting the values already stored
/// modifies nothing and yields `404`.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24 hex digit item identifier")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Item not found or unchanged", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    let draft = parse_item_request(payload.into_inner())?;
    let item = state.items.update(&id, draft).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Hard-delete an item.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24 hex digit item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_document_id(&path.into_inner())?;
    state.items.delete(&id).await?;
    Ok(web::Json(MessageResponse {
        message: ITEM_DELETED.to_owned(),
    }))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
