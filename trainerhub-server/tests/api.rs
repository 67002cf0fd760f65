//! Router-level tests: form submissions in, JSON out

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trainerhub_server::build_router;
use trainerhub_server::db::{create_memory_pool, initialize};

const SOCCER_COACH: &str = "sport=soccer&credentials=USSF+Level+1&biography=5+years+coaching&contact=coach%40example.com&price=40.00";
const JANE: &str = "parent_name=Jane+Doe&parent_contact=555-1234&preferred_datetime=2024-06-01T10%3A00%3A00&notes=";

async fn app() -> Router {
    let pool = create_memory_pool().await.unwrap();
    initialize(&pool).await.unwrap();
    build_router(pool, false)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = app().await;
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_then_list() {
    let app = app().await;

    let (status, created) = send(&app, post_form("/trainers", SOCCER_COACH)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, listed) = send(&app, get("/trainers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed,
        json!([{
            "id": 1,
            "sport": "soccer",
            "credentials": "USSF Level 1",
            "biography": "5 years coaching",
            "contact": "coach@example.com",
            "price": 40.0
        }])
    );
}

#[tokio::test]
async fn negative_price_is_rejected_and_not_stored() {
    let app = app().await;
    let form = SOCCER_COACH.replace("price=40.00", "price=-3");

    let (status, body) = send(&app, post_form("/trainers", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["fields"], json!(["price"]));

    let (_, listed) = send(&app, get("/trainers")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn missing_fields_are_named() {
    let app = app().await;

    let (status, body) = send(&app, post_form("/trainers", "sport=tennis")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["fields"],
        json!(["credentials", "biography", "contact", "price"])
    );
}

#[tokio::test]
async fn book_existing_trainer() {
    let app = app().await;
    send(&app, post_form("/trainers", SOCCER_COACH)).await;

    let (status, booking) = send(&app, post_form("/trainers/1/bookings", JANE)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["id"], 1);
    assert_eq!(booking["trainer_id"], 1);
    assert_eq!(booking["preferred_datetime"], "2024-06-01T10:00:00");
    assert_eq!(booking["notes"], "");
    assert_eq!(booking["trainer"]["sport"], "soccer");
    assert_eq!(booking["trainer"]["credentials"], "USSF Level 1");

    let (status, fetched) = send(&app, get("/bookings/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, booking);

    let (_, listed) = send(&app, get("/trainers/1/bookings")).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn book_via_form_trainer_id() {
    let app = app().await;
    send(&app, post_form("/trainers", SOCCER_COACH)).await;

    let form = format!("trainer_id=1&{JANE}");
    let (status, booking) = send(&app, post_form("/bookings", &form)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["trainer"]["id"], 1);
}

#[tokio::test]
async fn booking_unknown_trainer_is_404() {
    let app = app().await;

    let (status, body) = send(&app, post_form("/trainers/999/bookings", JANE)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "trainer '999' not found");

    let form = format!("trainer_id=999&{JANE}");
    let (status, _) = send(&app, post_form("/bookings", &form)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/bookings/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_datetime_is_400() {
    let app = app().await;
    send(&app, post_form("/trainers", SOCCER_COACH)).await;

    let form = JANE.replace("2024-06-01T10%3A00%3A00", "soon");
    let (status, body) = send(&app, post_form("/trainers/1/bookings", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["preferred_datetime"]));
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = app().await;

    let (status, body) = send(&app, get("/trainers/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["id"]));
}

#[tokio::test]
async fn unknown_trainer_lookup_is_404() {
    let app = app().await;
    let (status, body) = send(&app, get("/trainers/7")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
