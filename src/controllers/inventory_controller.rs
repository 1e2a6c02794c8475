use crate::dto::inventory_dto::InventoryResponse;
use crate::models::added_vehicle::InventoryStats;
use crate::repositories::SharedStore;
use crate::utils::errors::AppError;

/// Vehículos más recientes mostrados en las estadísticas
const RECENT_VEHICLES: i64 = 3;

pub struct InventoryController {
    store: SharedStore,
}

impl InventoryController {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<InventoryResponse, AppError> {
        Ok(InventoryResponse {
            inventory: self.store.list_inventory().await?,
        })
    }

    /// Las tres lecturas se lanzan en paralelo
    pub async fn stats(&self) -> Result<InventoryStats, AppError> {
        let (vehicle_count, part_count, recent_vehicles) = tokio::try_join!(
            self.store.count_vehicles(),
            self.store.count_available_parts(),
            self.store.recent_vehicles(RECENT_VEHICLES),
        )?;

        Ok(InventoryStats {
            vehicle_count,
            part_count,
            recent_vehicles,
        })
    }
}
