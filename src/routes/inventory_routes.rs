use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::inventory_controller::InventoryController;
use crate::dto::inventory_dto::InventoryResponse;
use crate::models::added_vehicle::InventoryStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/stats", get(inventory_stats))
}

async fn list_inventory(State(state): State<AppState>) -> Result<Json<InventoryResponse>, AppError> {
    let controller = InventoryController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}

async fn inventory_stats(State(state): State<AppState>) -> Result<Json<InventoryStats>, AppError> {
    let controller = InventoryController::new(state.store.clone());
    Ok(Json(controller.stats().await?))
}
