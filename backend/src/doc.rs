//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every item, clock-in and health endpoint
//! - **Schemas**: request/response DTOs and the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe error payloads
//!   without coupling domain types to utoipa
//!
//! The generated document is served by Swagger UI in debug builds.

use crate::inbound::http::clock_in::{ClockInRequest, ClockInResponse};
use crate::inbound::http::items::{
    EmailCountsResponse, ItemRequest, ItemResponse, MessageResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory backend API",
        description = "CRUD endpoints for inventory items and clock-in records, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::filter_items,
        crate::inbound::http::items::aggregate_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::clock_in::create_clock_in,
        crate::inbound::http::clock_in::filter_clock_in,
        crate::inbound::http::clock_in::get_clock_in,
        crate::inbound::http::clock_in::update_clock_in,
        crate::inbound::http::clock_in::delete_clock_in,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ItemRequest,
        ItemResponse,
        EmailCountsResponse,
        MessageResponse,
        ClockInRequest,
        ClockInResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "items", description = "Inventory item records"),
        (name = "clock-in", description = "Attendance records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
