//! Builders wiring MongoDB repositories into the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use backend::domain::{ClockInService, ItemService};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{MongoClockInRepository, MongoItemRepository};

use super::ServerConfig;

/// Build the handler state from the repositories behind the configured
/// gateway.
///
/// Each resource has one service that serves both its command and query
/// port.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let items = Arc::new(ItemService::new(
        Arc::new(MongoItemRepository::new(&config.gateway)),
        config.clock.clone(),
    ));
    let clock_in = Arc::new(ClockInService::new(
        Arc::new(MongoClockInRepository::new(&config.gateway)),
        config.clock.clone(),
    ));
    web::Data::new(HttpState::new(
        items.clone(),
        items,
        clock_in.clone(),
        clock_in,
    ))
}
