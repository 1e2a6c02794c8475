use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use junkyard_inventory::config::EnvironmentConfig;
use junkyard_inventory::database::seed::{parse_parts_matrix, parse_vehicles, CatalogSeed};
use junkyard_inventory::repositories::MemoryStore;
use junkyard_inventory::{create_app_router, AppState};

const VEHICLES: &str = "year,make,model,trim
2019,Toyota,Corolla,LE
2020,Honda,Civic,EX
2020,Honda,Civic,LX
2020,Honda,Accord,
";

const PARTS: &str = "Body,Engine
Hood,Alternator
Door,Radiator
";

async fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let (categories, parts) = parse_parts_matrix(PARTS.as_bytes()).unwrap();
    let seed = CatalogSeed {
        vehicles: parse_vehicles(VEHICLES.as_bytes()).unwrap(),
        categories,
        parts,
    };
    let store = Arc::new(MemoryStore::new());
    store.seed(&seed).await;

    let config = EnvironmentConfig {
        bcrypt_cost: 4,
        ..EnvironmentConfig::default()
    };
    let app = create_app_router(AppState::new(store.clone(), config));
    (app, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn civic_ex(parts: Value) -> Value {
    json!({ "year": 2020, "make": "Honda", "model": "Civic", "trim": "EX", "parts": parts })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cascading_catalog_queries() {
    let (app, _) = create_test_app().await;

    let (_, body) = get(&app, "/years").await;
    assert_eq!(body, json!({ "years": [{ "year": 2019 }, { "year": 2020 }] }));

    let (_, body) = get(&app, "/makes?year=2020").await;
    assert_eq!(body, json!({ "makes": [{ "make": "Honda" }] }));

    let (_, body) = get(&app, "/models?year=2020&make=Honda").await;
    assert_eq!(body, json!({ "models": [{ "model": "Accord" }, { "model": "Civic" }] }));

    let (_, body) = get(&app, "/trims?year=2020&make=Honda&model=Accord").await;
    assert_eq!(body, json!({ "trims": [{ "trim": "N/A" }] }));

    let (_, body) = get(&app, "/part-categories").await;
    assert_eq!(body["partCategories"][0]["name"], "Body");

    let (_, body) = get(&app, "/parts").await;
    let names: Vec<&str> = body["parts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alternator", "Door", "Hood", "Radiator"]);
}

#[tokio::test]
async fn test_missing_filters_are_bad_requests() {
    let (app, _) = create_test_app().await;

    for uri in ["/makes", "/makes?year=abc", "/models?year=2020", "/trims?year=2020&make=Honda"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_civic_lifecycle() {
    let (app, store) = create_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/vehicle",
        Some(civic_ex(json!([
            { "id": 1, "available": true },
            { "id": 2, "available": "1" }
        ]))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = get(&app, "/vehicle/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["make"], "Honda");
    assert_eq!(body["vehicle"]["trim"], "EX");
    assert_eq!(body["parts"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/vehicle/1",
        Some(json!({ "parts": [{ "id": 1, "name": "Hood", "category_id": 1, "available": 0 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/vehicle/1").await;
    let parts = body["parts"].as_array().unwrap();
    let hood = parts.iter().find(|p| p["id"] == 1).unwrap();
    let alternator = parts.iter().find(|p| p["id"] == 2).unwrap();
    assert_eq!(hood["available"], false);
    assert_eq!(alternator["available"], true);

    let (_, stats) = get(&app, "/inventory/stats").await;
    assert_eq!(stats["vehicle_count"], 1);
    assert_eq!(stats["part_count"], 1);

    let (status, body) = send(&app, Method::DELETE, "/vehicle/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = get(&app, "/vehicle/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.vehicle_part_rows(1).await, 0);

    let (_, body) = get(&app, "/inventory").await;
    assert_eq!(body, json!({ "inventory": [] }));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let (app, _) = create_test_app().await;

    let cases = [
        json!({ "year": 2020, "make": "Honda", "model": "Civic", "parts": [{ "id": 1, "available": true }] }),
        civic_ex(json!([])),
        civic_ex(json!([{ "id": 1, "available": "maybe" }])),
        civic_ex(json!([{ "id": 1, "available": true }, { "id": 1, "available": false }])),
        civic_ex(json!([{ "id": 99, "available": true }])),
    ];
    for body in cases {
        let (status, response) = send(&app, Method::POST, "/vehicle", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert!(response["message"].is_string());
    }

    let (status, _) = send(&app, Method::POST, "/vehicle", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stats) = get(&app, "/inventory/stats").await;
    assert_eq!(stats["vehicle_count"], 0);
}

#[tokio::test]
async fn test_unknown_catalog_vehicle_is_not_found() {
    let (app, _) = create_test_app().await;
    let mut body = civic_ex(json!([{ "id": 1, "available": true }]));
    body["trim"] = json!("Type R");

    let (status, response) = send(&app, Method::POST, "/vehicle", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "vehicle not found");

    let (_, inventory) = get(&app, "/inventory").await;
    assert_eq!(inventory["inventory"], json!([]));
}

#[tokio::test]
async fn test_update_rejects_unrecorded_parts_and_bad_flags() {
    let (app, _) = create_test_app().await;
    send(&app, Method::POST, "/vehicle", Some(civic_ex(json!([{ "id": 1, "available": true }])))).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/vehicle/1",
        Some(json!({ "parts": [
            { "id": 1, "name": "Hood", "category_id": 1, "available": 0 },
            { "id": 4, "name": "Radiator", "category_id": 2, "available": 0 }
        ] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/vehicle/1",
        Some(json!({ "parts": [{ "id": 1, "name": "Hood", "category_id": 1, "available": true }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/vehicle/1").await;
    assert_eq!(body["parts"][0]["available"], true);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/vehicle/42",
        Some(json!({ "parts": [{ "id": 1, "name": "Hood", "category_id": 1, "available": 1 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_vehicle_ids() {
    let (app, _) = create_test_app().await;

    for uri in ["/vehicle/abc", "/vehicle/0", "/vehicle/-3", "/vehicle/1.5"] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
    let (status, _) = send(&app, Method::DELETE, "/vehicle/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::DELETE, "/vehicle/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_recent_vehicles() {
    let (app, _) = create_test_app().await;
    for trim in ["EX", "LX", "EX", "LX"] {
        let mut body = civic_ex(json!([{ "id": 1, "available": true }, { "id": 3, "available": false }]));
        body["trim"] = json!(trim);
        let (status, _) = send(&app, Method::POST, "/vehicle", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, stats) = get(&app, "/inventory/stats").await;
    assert_eq!(stats["vehicle_count"], 4);
    assert_eq!(stats["part_count"], 4);
    let recent: Vec<i64> = stats["recent_vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(recent, vec![4, 3, 2]);
}

#[tokio::test]
async fn test_register_and_login() {
    let (app, _) = create_test_app().await;
    let credentials = json!({ "username": "yard", "password": "s3cret" });

    let (status, _) = send(&app, Method::POST, "/register", Some(credentials.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, Method::POST, "/register", Some(credentials.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::POST, "/login", Some(credentials)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "yard");
    assert!(body.get("password").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "username": "yard", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "username": " ", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (app, _) = create_test_app().await;
    let (status, body) = get(&app, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
