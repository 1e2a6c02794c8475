use async_trait::async_trait;

use crate::models::added_vehicle::InventoryVehicle;
use crate::repositories::{InventoryRepository, PgStore};
use crate::utils::errors::{db_error, AppResult};

#[async_trait]
impl InventoryRepository for PgStore {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryVehicle>> {
        let inventory = sqlx::query_as::<_, InventoryVehicle>(
            r#"
            SELECT added_vehicles.id, vehicles.year, vehicles.make, vehicles.model, vehicles."trim"
            FROM added_vehicles
            JOIN vehicles ON added_vehicles.vehicle_id = vehicles.id
            ORDER BY added_vehicles.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing inventory"))?;

        Ok(inventory)
    }

    async fn count_vehicles(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM added_vehicles")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting vehicles"))?;

        Ok(count)
    }

    async fn count_available_parts(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM vehicle_parts WHERE available = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("counting available parts"))?;

        Ok(count)
    }

    async fn recent_vehicles(&self, limit: i64) -> AppResult<Vec<InventoryVehicle>> {
        let vehicles = sqlx::query_as::<_, InventoryVehicle>(
            r#"
            SELECT added_vehicles.id, vehicles.year, vehicles.make, vehicles.model, vehicles."trim"
            FROM added_vehicles
            JOIN vehicles ON added_vehicles.vehicle_id = vehicles.id
            ORDER BY added_vehicles.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing recent vehicles"))?;

        Ok(vehicles)
    }
}
