//! Shared helpers for the endpoint integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! each one pulls this module in with `mod support;` and uses the parts it
//! needs.
#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use backend::Trace;
use backend::domain::{ClockInService, ItemService};
use backend::inbound::http::configure_api;
use backend::inbound::http::state::HttpState;
use backend::test_support::{InMemoryClockInRepository, InMemoryItemRepository, MutableClock};

/// Real domain services over in-memory repositories and a controllable clock.
#[derive(Default)]
pub struct Harness {
    pub items: Arc<InMemoryItemRepository>,
    pub clock_in: Arc<InMemoryClockInRepository>,
    pub clock: Arc<MutableClock>,
}

impl Harness {
    /// Build the application exactly as the server does, minus the health routes.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let items = Arc::new(ItemService::new(self.items.clone(), self.clock.clone()));
        let clock_in = Arc::new(ClockInService::new(
            self.clock_in.clone(),
            self.clock.clone(),
        ));
        let state = HttpState::new(items.clone(), items, clock_in.clone(), clock_in);
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_api)
    }
}

/// Send `request` and decode the JSON body.
pub async fn send<S>(app: &S, request: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

/// A complete, valid item payload.
pub fn item_body(email: &str, quantity: i64) -> Value {
    serde_json::json!({
        "name": "Ada",
        "email": email,
        "item_name": "Widget",
        "quantity": quantity,
        "expiry_date": "2024-06-15",
    })
}

/// Create an item through the API and return its identifier.
pub async fn create_item<S>(app: &S, body: Value) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(body)
        .to_request();
    let (status, created) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");
    created["id"].as_str().expect("id is a string").to_owned()
}

/// Assert that an error payload carries the given detail code.
pub fn assert_detail_code(body: &Value, code: &str) {
    assert_eq!(body["code"], "invalid_request", "payload: {body}");
    assert_eq!(body["details"]["code"], code, "payload: {body}");
}
