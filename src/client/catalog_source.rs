//! Fuente de datos de los formularios
//!
//! Los formularios son genéricos sobre este trait: en producción lo
//! implementa `InventoryApiClient`, en pruebas un doble en memoria.

use async_trait::async_trait;

use crate::client::error::ClientResult;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, MessageResponse, UpdateVehiclePartsRequest,
    VehicleDetailResponse,
};
use crate::models::added_vehicle::{InventoryStats, InventoryVehicle};
use crate::models::catalog::{Part, PartCategory};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn years(&self) -> ClientResult<Vec<i32>>;
    async fn makes(&self, year: i32) -> ClientResult<Vec<String>>;
    async fn models(&self, year: i32, make: &str) -> ClientResult<Vec<String>>;
    async fn trims(&self, year: i32, make: &str, model: &str) -> ClientResult<Vec<String>>;
    async fn part_categories(&self) -> ClientResult<Vec<PartCategory>>;
    async fn parts(&self) -> ClientResult<Vec<Part>>;

    async fn create_vehicle(&self, request: &CreateVehicleRequest) -> ClientResult<CreateVehicleResponse>;
    async fn get_vehicle(&self, id: i32) -> ClientResult<VehicleDetailResponse>;
    async fn update_vehicle_parts(
        &self,
        id: i32,
        request: &UpdateVehiclePartsRequest,
    ) -> ClientResult<MessageResponse>;
    async fn delete_vehicle(&self, id: i32) -> ClientResult<MessageResponse>;

    async fn inventory(&self) -> ClientResult<Vec<InventoryVehicle>>;
    async fn stats(&self) -> ClientResult<InventoryStats>;
}
