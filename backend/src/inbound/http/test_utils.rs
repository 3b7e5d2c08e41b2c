//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};

use crate::Trace;
use crate::domain::ports::{MockClockInCommand, MockClockInQuery, MockItemCommand, MockItemQuery};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; tests set expectations on the ones they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub items: MockItemCommand,
    pub items_query: MockItemQuery,
    pub clock_in: MockClockInCommand,
    pub clock_in_query: MockClockInQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.items),
            Arc::new(self.items_query),
            Arc::new(self.clock_in),
            Arc::new(self.clock_in_query),
        ))
    }
}

/// Build the API service over mocked ports, wrapped in the trace middleware.
pub async fn init_api(
    ports: MockPorts,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(ports.into_state())
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}
