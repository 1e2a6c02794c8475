//! Fuente en proceso para probar los formularios sin servidor HTTP

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::catalog_source::CatalogSource;
use crate::client::error::{ClientError, ClientResult};
use crate::controllers::catalog_controller::CatalogController;
use crate::controllers::inventory_controller::InventoryController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::database::seed::{CatalogSeed, SeedPart};
use crate::dto::catalog_dto::CatalogFilterQuery;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, MessageResponse, UpdateVehiclePartsRequest,
    VehicleDetailResponse,
};
use crate::models::added_vehicle::{InventoryStats, InventoryVehicle};
use crate::models::catalog::{Part, PartCategory, VehicleSpec};
use crate::repositories::{MemoryStore, SharedStore};
use crate::utils::errors::AppError;

pub struct InProcessSource {
    pub store: Arc<MemoryStore>,
    pub fail_models: AtomicBool,
}

fn api_error(error: AppError) -> ClientError {
    ClientError::Api {
        status: error.status_code().as_u16(),
        message: error.to_string(),
    }
}

fn filter(year: i32, make: Option<&str>, model: Option<&str>) -> CatalogFilterQuery {
    CatalogFilterQuery {
        year: Some(year.to_string()),
        make: make.map(String::from),
        model: model.map(String::from),
    }
}

impl InProcessSource {
    pub async fn seeded() -> Self {
        let store = Arc::new(MemoryStore::new());
        let vehicle = |year, make: &str, model: &str, trim: &str| VehicleSpec {
            year,
            make: make.into(),
            model: model.into(),
            trim: trim.into(),
        };
        store
            .seed(&CatalogSeed {
                vehicles: vec![
                    vehicle(2019, "Toyota", "Corolla", "LE"),
                    vehicle(2020, "Honda", "Civic", "EX"),
                    vehicle(2020, "Honda", "Civic", "LX"),
                    vehicle(2020, "Honda", "Accord", "Sport"),
                ],
                categories: vec!["Body".into(), "Engine".into()],
                parts: vec![
                    SeedPart { name: "Hood".into(), category: "Body".into() },
                    SeedPart { name: "Alternator".into(), category: "Engine".into() },
                    SeedPart { name: "Radiator".into(), category: "Engine".into() },
                ],
            })
            .await;

        Self {
            store,
            fail_models: AtomicBool::new(false),
        }
    }

    fn shared(&self) -> SharedStore {
        self.store.clone()
    }
}

#[async_trait]
impl CatalogSource for InProcessSource {
    async fn years(&self) -> ClientResult<Vec<i32>> {
        let response = CatalogController::new(self.shared()).years().await.map_err(api_error)?;
        Ok(response.years.into_iter().map(|y| y.year).collect())
    }

    async fn makes(&self, year: i32) -> ClientResult<Vec<String>> {
        let response = CatalogController::new(self.shared())
            .makes(&filter(year, None, None))
            .await
            .map_err(api_error)?;
        Ok(response.makes.into_iter().map(|m| m.make).collect())
    }

    async fn models(&self, year: i32, make: &str) -> ClientResult<Vec<String>> {
        if self.fail_models.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 500,
                message: "An error occurred while accessing the database".into(),
            });
        }
        let response = CatalogController::new(self.shared())
            .models(&filter(year, Some(make), None))
            .await
            .map_err(api_error)?;
        Ok(response.models.into_iter().map(|m| m.model).collect())
    }

    async fn trims(&self, year: i32, make: &str, model: &str) -> ClientResult<Vec<String>> {
        let response = CatalogController::new(self.shared())
            .trims(&filter(year, Some(make), Some(model)))
            .await
            .map_err(api_error)?;
        Ok(response.trims.into_iter().map(|t| t.trim).collect())
    }

    async fn part_categories(&self) -> ClientResult<Vec<PartCategory>> {
        let response = CatalogController::new(self.shared())
            .part_categories()
            .await
            .map_err(api_error)?;
        Ok(response.part_categories)
    }

    async fn parts(&self) -> ClientResult<Vec<Part>> {
        let response = CatalogController::new(self.shared()).parts().await.map_err(api_error)?;
        Ok(response.parts)
    }

    async fn create_vehicle(&self, request: &CreateVehicleRequest) -> ClientResult<CreateVehicleResponse> {
        VehicleController::new(self.shared())
            .create(request.clone())
            .await
            .map_err(api_error)
    }

    async fn get_vehicle(&self, id: i32) -> ClientResult<VehicleDetailResponse> {
        VehicleController::new(self.shared())
            .get_by_id(&id.to_string())
            .await
            .map_err(api_error)
    }

    async fn update_vehicle_parts(
        &self,
        id: i32,
        request: &UpdateVehiclePartsRequest,
    ) -> ClientResult<MessageResponse> {
        VehicleController::new(self.shared())
            .update_parts(&id.to_string(), request.clone())
            .await
            .map_err(api_error)
    }

    async fn delete_vehicle(&self, id: i32) -> ClientResult<MessageResponse> {
        VehicleController::new(self.shared())
            .delete(&id.to_string())
            .await
            .map_err(api_error)
    }

    async fn inventory(&self) -> ClientResult<Vec<InventoryVehicle>> {
        let response = InventoryController::new(self.shared()).list().await.map_err(api_error)?;
        Ok(response.inventory)
    }

    async fn stats(&self) -> ClientResult<InventoryStats> {
        InventoryController::new(self.shared()).stats().await.map_err(api_error)
    }
}
