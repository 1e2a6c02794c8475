//! Repositorios
//!
//! Acceso a datos detrás de traits para que los controladores no dependan
//! del motor. `PgStore` es la implementación sobre PostgreSQL;
//! `MemoryStore` mantiene las mismas garantías en memoria.

pub mod catalog_repository;
pub mod inventory_repository;
pub mod memory_store;
pub mod pg_store;
pub mod user_repository;
pub mod vehicle_repository;

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{
    AddedVehicleDetail, InventoryVehicle, Part, PartAvailability, PartCategory, User,
    VehiclePartDetail, VehicleSpec,
};
use crate::utils::errors::AppResult;

pub use memory_store::MemoryStore;
pub use pg_store::PgStore;

/// Consultas de solo lectura sobre el catálogo
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_years(&self) -> AppResult<Vec<i32>>;
    async fn list_makes(&self, year: i32) -> AppResult<Vec<String>>;
    async fn list_models(&self, year: i32, make: &str) -> AppResult<Vec<String>>;
    async fn list_trims(&self, year: i32, make: &str, model: &str) -> AppResult<Vec<String>>;
    async fn list_part_categories(&self) -> AppResult<Vec<PartCategory>>;
    async fn list_parts(&self) -> AppResult<Vec<Part>>;
}

/// Ciclo de vida de los vehículos agregados y sus piezas.
/// Cada operación de escritura es atómica.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Resuelve el vehículo del catálogo e inserta el vehículo agregado con
    /// todas sus piezas. Devuelve el id del vehículo agregado.
    async fn create_with_parts(&self, spec: &VehicleSpec, parts: &[PartAvailability]) -> AppResult<i32>;

    /// Vehículo y piezas leídos de una sola instantánea
    async fn find_with_parts(
        &self,
        id: i32,
    ) -> AppResult<Option<(AddedVehicleDetail, Vec<VehiclePartDetail>)>>;

    async fn find_parts(&self, id: i32) -> AppResult<Vec<VehiclePartDetail>>;

    /// Actualiza la disponibilidad de las piezas indicadas. Todas deben
    /// tener fila para el vehículo; si falta alguna no se modifica nada.
    async fn set_parts_availability(&self, id: i32, parts: &[PartAvailability]) -> AppResult<u64>;

    /// Elimina las piezas y luego el vehículo. Devuelve las piezas eliminadas.
    async fn delete_with_parts(&self, id: i32) -> AppResult<u64>;
}

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryVehicle>>;
    async fn count_vehicles(&self) -> AppResult<i64>;
    async fn count_available_parts(&self) -> AppResult<i64>;
    async fn recent_vehicles(&self, limit: i64) -> AppResult<Vec<InventoryVehicle>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Almacenamiento completo usado por la aplicación
pub trait Store: CatalogRepository + VehicleRepository + InventoryRepository + UserRepository {}

impl<T> Store for T where T: CatalogRepository + VehicleRepository + InventoryRepository + UserRepository {}

pub type SharedStore = Arc<dyn Store>;
