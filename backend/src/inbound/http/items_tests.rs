//! Tests for the item HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::{DocumentId, EmailAddress, ITEM_NOT_FOUND};
use crate::inbound::http::test_utils::{MockPorts, init_api};
use crate::test_support::fixture_timestamp;

const ITEM_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

#[fixture]
fn item() -> Item {
    Item {
        id: DocumentId::new(ITEM_ID).expect("valid id"),
        name: "Ada".to_owned(),
        email: EmailAddress::new("a@x.com").expect("valid email"),
        item_name: "Widget".to_owned(),
        quantity: -5,
        expiry_date: "2024-06-15".to_owned(),
        insert_date: fixture_timestamp(),
    }
}

fn item_body() -> Value {
    json!({
        "name": "Ada",
        "email": "a@x.com",
        "item_name": "Widget",
        "quantity": -5,
        "expiry_date": "2024-06-15",
    })
}

#[rstest]
fn parse_item_request_rejects_missing_fields() {
    let payload = ItemRequest {
        name: Some("Ada".to_owned()),
        email: Some("a@x.com".to_owned()),
        item_name: None,
        quantity: Some(1),
        expiry_date: Some("2024-06-15".to_owned()),
    };

    let err = parse_item_request(payload).expect_err("missing item_name");
    let details = err.details().expect("details");
    assert_eq!(details["field"], "item_name");
    assert_eq!(details["code"], "missing_field");
}

#[rstest]
fn parse_item_filter_applies_falsy_semantics() {
    let filter = parse_item_filter(ItemFilterQuery {
        email: Some(String::new()),
        expiry_date: Some("2024-06-01".to_owned()),
        insert_date: None,
        quantity: Some("0".to_owned()),
    })
    .expect("valid filter");
    assert_eq!(
        filter,
        ItemFilter {
            expiry_date_from: Some("2024-06-01".to_owned()),
            ..ItemFilter::default()
        }
    );
}

#[rstest]
#[actix_web::test]
async fn create_returns_stored_item(item: Item) {
    let mut ports = MockPorts::default();
    ports
        .items
        .expect_create()
        .withf(|draft| draft.quantity == -5 && draft.email.as_ref() == "a@x.com")
        .return_once(move |_| Ok(item));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(item_body())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("trace-id"));
    let body: ItemResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.id, ITEM_ID);
    assert_eq!(body.quantity, -5);
    assert_eq!(body.insert_date, "2024-01-10T12:00:00+00:00");
}

#[rstest]
#[actix_web::test]
async fn create_rejects_invalid_email_before_reaching_service() {
    let mut ports = MockPorts::default();
    ports.items.expect_create().never();
    let app = init_api(ports).await;

    let mut body = item_body();
    body["email"] = json!("not-an-email");
    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["details"]["code"], "invalid_email");
    assert!(payload["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn create_rejects_fractional_quantity() {
    let app = init_api(MockPorts::default()).await;

    let mut body = item_body();
    body["quantity"] = json!(2.5);
    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn get_maps_missing_item_to_not_found() {
    let mut ports = MockPorts::default();
    ports
        .items_query
        .expect_get()
        .with(eq(DocumentId::new(ITEM_ID).expect("valid id")))
        .return_once(|_| Err(Error::not_found(ITEM_NOT_FOUND)));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/items/{ITEM_ID}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["message"], ITEM_NOT_FOUND);
}

#[rstest]
#[case::get(actix_test::TestRequest::get())]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn malformed_ids_are_rejected(#[case] request: actix_test::TestRequest) {
    let app = init_api(MockPorts::default()).await;

    let response = actix_test::call_service(&app, request.uri("/items/123").to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["code"], "invalid_id");
}

#[rstest]
#[actix_web::test]
async fn filter_routes_ahead_of_id_lookup(item: Item) {
    let mut ports = MockPorts::default();
    ports
        .items_query
        .expect_filter()
        .withf(|filter| filter.min_quantity == Some(5) && filter.email.is_none())
        .return_once(move |_| Ok(vec![item]));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::get()
        .uri("/items/filter?quantity=5&email=")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<ItemResponse> = actix_test::read_body_json(response).await;
    assert_eq!(body.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn filter_rejects_unparsable_insert_date() {
    let app = init_api(MockPorts::default()).await;

    let request = actix_test::TestRequest::get()
        .uri("/items/filter?insert_date=yesterday")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["code"], "invalid_timestamp");
    assert_eq!(payload["details"]["field"], "insert_date");
}

#[rstest]
#[actix_web::test]
async fn aggregate_returns_email_mapping() {
    let mut ports = MockPorts::default();
    ports.items_query.expect_count_by_email().return_once(|| {
        Ok(vec![
            EmailItemCount {
                email: "a@x.com".to_owned(),
                count: 2,
            },
            EmailItemCount {
                email: "b@x.com".to_owned(),
                count: 1,
            },
        ])
    });
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::get().uri("/items/aggregate").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"a@x.com": 2, "b@x.com": 1}));
}

#[rstest]
#[actix_web::test]
async fn delete_reports_success_message() {
    let mut ports = MockPorts::default();
    ports.items.expect_delete().return_once(|_| Ok(()));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/items/{ITEM_ID}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, ITEM_DELETED);
}

#[rstest]
#[actix_web::test]
async fn update_passes_parsed_draft(item: Item) {
    let mut ports = MockPorts::default();
    ports
        .items
        .expect_update()
        .withf(|id, draft| id.as_ref() == ITEM_ID && draft.item_name == "Widget")
        .return_once(move |_, _| Ok(item));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/items/{ITEM_ID}"))
        .set_json(item_body())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn service_unavailable_surfaces_as_503() {
    let mut ports = MockPorts::default();
    ports
        .items_query
        .expect_filter()
        .return_once(|_| Err(Error::service_unavailable("store down")));
    let app = init_api(ports).await;

    let request = actix_test::TestRequest::get().uri("/items/filter").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
