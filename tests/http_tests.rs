//! HTTP API tests driving the router directly

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use civic_calendar::utils::ManualClock;
use civic_calendar::{create_router, AppState, Calendar, Config, InMemoryStore};

const PREFIX: &str = "/api/v1/internal";

fn app() -> Router {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    ));
    let config = Config {
        base_url: "https://eventos.example".to_string(),
        ..Config::default()
    };
    let calendar = Calendar::with_store(Arc::new(InMemoryStore::new()), clock, &config);
    create_router(Arc::new(AppState::new(calendar)))
}

fn event_body(start: &str) -> Value {
    json!({
        "title": "Festival de Música",
        "description": "Bandas locais na praça",
        "startDate": start,
        "endDate": "2025-12-31T23:00:00Z",
        "location": "Praça do Coreto",
        "address": "Praça do Coreto, Centro",
        "coordinates": { "latitude": -22.9, "longitude": -43.2 },
        "organizer": "Fundação Cultural",
        "contact": "cultura@cidade.gov.br",
        "category": "cultural",
        "howToGetThere": "Ônibus 200",
        "ticketInfo": "Entrada franca"
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create(app: &Router, start: &str) -> u64 {
    let uri = format!("{}/event", PREFIX);
    let (status, body) = send(app, Method::POST, &uri, Some(event_body(start))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_u64().unwrap()
}

async fn approve(app: &Router, id: u64) {
    let (status, _) = send(
        app,
        Method::PUT,
        &format!("{}/event/{}/status", PREFIX, id),
        Some(json!({ "status": "aprovado" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_and_get() {
    let app = app();
    let id = create(&app, "2025-12-31T20:00:00Z").await;
    assert_eq!(id, 1);

    let (status, body) = send(&app, Method::GET, &format!("{}/event/1", PREFIX), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "pendente");
    assert_eq!(body["data"]["featured"], false);
    assert_eq!(body["data"]["externalLink"], Value::Null);
    assert_eq!(body["data"]["galleryConfig"]["displayType"], "carrossel");
    assert_eq!(body["data"]["dateCreated"], body["data"]["dateModified"]);
}

#[tokio::test]
async fn test_create_ignores_status_and_featured_in_body() {
    let app = app();
    let mut body = event_body("2025-12-31T20:00:00Z");
    body["status"] = json!("aprovado");
    body["featured"] = json!(true);

    let uri = format!("{}/event", PREFIX);
    let (status, created) = send(&app, Method::POST, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_u64().unwrap();

    let (_, fetched) = send(&app, Method::GET, &format!("{}/event/{}", PREFIX, id), None).await;
    assert_eq!(fetched["data"]["status"], "pendente");
    assert_eq!(fetched["data"]["featured"], false);
}

#[tokio::test]
async fn test_create_validation_error() {
    let app = app();
    let mut body = event_body("2025-12-31T20:00:00Z");
    body["title"] = json!("");
    body["images"] = json!(["not-a-url"]);

    let uri = format!("{}/event", PREFIX);
    let (status, response) = send(&app, Method::POST, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = response["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"images[0]"));
}

#[tokio::test]
async fn test_create_rejects_unknown_category_and_bad_json() {
    let app = app();
    let mut body = event_body("2025-12-31T20:00:00Z");
    body["category"] = json!("gastronomia");
    let (status, _) = send(&app, Method::POST, &format!("{}/event", PREFIX), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{}/event", PREFIX))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_and_missing_ids() {
    let app = app();

    let (status, _) = send(&app, Method::GET, &format!("{}/event/abc", PREFIX), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, &format!("{}/event/0", PREFIX), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, &format!("{}/event/77", PREFIX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_and_clear_ticket_info() {
    let app = app();
    let id = create(&app, "2025-12-31T20:00:00Z").await;
    let uri = format!("{}/event/{}", PREFIX, id);

    let rename = json!({ "title": "Novo título" });
    let (status, body) = send(&app, Method::PUT, &uri, Some(rename)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Novo título");
    assert_eq!(body["data"]["ticketInfo"], "Entrada franca");

    let (_, body) = send(&app, Method::PUT, &uri, Some(json!({ "ticketInfo": null }))).await;
    assert_eq!(body["data"]["ticketInfo"], Value::Null);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("{}/event/404", PREFIX),
        Some(json!({ "title": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_null_on_required_fields() {
    let app = app();
    let id = create(&app, "2025-12-31T20:00:00Z").await;
    let uri = format!("{}/event/{}", PREFIX, id);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "title": null, "featured": null, "images": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "images", "featured"]);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["title"], "Festival de Música");
}

#[tokio::test]
async fn test_delete() {
    let app = app();
    let id = create(&app, "2025-12-31T20:00:00Z").await;
    let uri = format!("{}/event/{}", PREFIX, id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_filters() {
    let app = app();
    let approved = create(&app, "2025-12-31T20:00:00Z").await;
    approve(&app, approved).await;
    create(&app, "2025-12-31T20:00:00Z").await;

    let (status, body) = send(&app, Method::GET, &format!("{}/event", PREFIX), None).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["isPast"], false);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("{}/event?category=esportivo&category=civic", PREFIX),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("{}/event?category=esportivo,todos&search=M%C3%9ASICA", PREFIX),
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("{}/event?format=anual", PREFIX);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_featured() {
    let app = app();
    let id = create(&app, "2025-03-10T20:00:00Z").await;
    approve(&app, id).await;
    send(
        &app,
        Method::PUT,
        &format!("{}/event/{}", PREFIX, id),
        Some(json!({ "featured": true })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, &format!("{}/event/featured", PREFIX), None).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["showCountdown"], true);
    assert_eq!(data[0]["countdownConfig"]["highlightColor"], "#FF4500");
}

#[tokio::test]
async fn test_history() {
    let app = app();
    let past = create(&app, "2025-01-15T20:00:00Z").await;
    approve(&app, past).await;
    let future = create(&app, "2025-12-31T20:00:00Z").await;
    approve(&app, future).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!(
            "{}/event/history?startDate=01/01/2025&endDate=01/03/2025&pageSize=10",
            PREFIX
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["metadata"],
        json!({ "page": 1, "pageSize": 10, "total": 1, "hasNext": false, "hasPrevious": false })
    );

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("{}/event/history?startDate=01/01/2023&endDate=01/03/2025", PREFIX),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        Method::GET,
        &format!(
            "{}/event/history?startDate=01/01/2025&endDate=01/03/2025&pageSize=500",
            PREFIX
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_share() {
    let app = app();
    let id = create(&app, "2025-06-01T10:00:00Z").await;
    let uri = format!("{}/event/{}/share", PREFIX, id);

    let calendar = json!({ "platform": "calendario" });
    let (status, body) = send(&app, Method::POST, &uri, Some(calendar)).await;
    assert_eq!(status, StatusCode::OK);
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.contains("dates=20250601T100000Z/20251231T230000Z"));

    let (_, body) = send(&app, Method::POST, &uri, Some(json!({ "platform": "facebook" }))).await;
    assert_eq!(
        body["data"]["url"],
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Feventos.example%2Fevent%2F1"
    );

    let (status, _) = send(&app, Method::POST, &uri, Some(json!({ "platform": "orkut" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("{}/event/9/share", PREFIX),
        Some(json!({ "platform": "email" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_print() {
    let app = app();
    let id = create(&app, "2025-06-01T10:00:00Z").await;
    let uri = format!("{}/event/{}/print", PREFIX, id);

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["config"]["format"], "completo");
    assert_eq!(body["data"]["config"]["paperSize"], "A4");
    assert_eq!(body["data"]["includeMap"], true);
    assert_eq!(body["data"]["event"]["organizer"], "Fundação Cultural");
    assert_eq!(body["data"]["qrCode"], "https://eventos.example/event/1");

    let (_, body) = send(&app, Method::POST, &uri, Some(json!({ "format": "resumido" }))).await;
    assert_eq!(body["data"]["event"].as_object().unwrap().len(), 6);

    let (status, _) = send(&app, Method::POST, &uri, Some(json!({ "paperSize": "A3" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
