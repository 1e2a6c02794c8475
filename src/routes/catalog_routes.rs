use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::{
    CatalogFilterQuery, MakesResponse, ModelsResponse, PartCategoriesResponse, PartsResponse,
    TrimsResponse, YearsResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/years", get(list_years))
        .route("/makes", get(list_makes))
        .route("/models", get(list_models))
        .route("/trims", get(list_trims))
        .route("/part-categories", get(list_part_categories))
        .route("/parts", get(list_parts))
}

async fn list_years(State(state): State<AppState>) -> Result<Json<YearsResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.years().await?))
}

async fn list_makes(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilterQuery>,
) -> Result<Json<MakesResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.makes(&filter).await?))
}

async fn list_models(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilterQuery>,
) -> Result<Json<ModelsResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.models(&filter).await?))
}

async fn list_trims(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilterQuery>,
) -> Result<Json<TrimsResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.trims(&filter).await?))
}

async fn list_part_categories(
    State(state): State<AppState>,
) -> Result<Json<PartCategoriesResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.part_categories().await?))
}

async fn list_parts(State(state): State<AppState>) -> Result<Json<PartsResponse>, AppError> {
    let controller = CatalogController::new(state.store.clone());
    Ok(Json(controller.parts().await?))
}
