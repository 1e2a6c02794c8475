//! Rutas HTTP
//!
//! Ensambla el router completo de la API.

pub mod auth_routes;
pub mod catalog_routes;
pub mod inventory_routes;
pub mod vehicle_routes;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::ErrorResponse;

/// Router de la aplicación con CORS y trazas
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .merge(catalog_routes::create_catalog_router())
        .merge(auth_routes::create_auth_router())
        .nest("/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/inventory", inventory_routes::create_inventory_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "junkyard-inventory",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
            message: "Route not found".to_string(),
            details: None,
            code: "NOT_FOUND".to_string(),
        }),
    )
}
