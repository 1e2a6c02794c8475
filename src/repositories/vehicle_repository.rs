use async_trait::async_trait;
use std::collections::HashSet;

use crate::models::added_vehicle::{AddedVehicleDetail, PartAvailability, VehiclePartDetail};
use crate::models::catalog::VehicleSpec;
use crate::repositories::pg_store::part_write_error;
use crate::repositories::{PgStore, VehicleRepository};
use crate::utils::errors::{db_error, not_found_error, validation_error, AppResult};

const PARTS_OF_VEHICLE: &str = r#"
    SELECT parts.id, parts.name, parts.category_id, vehicle_parts.available
    FROM vehicle_parts
    JOIN parts ON vehicle_parts.part_id = parts.id
    WHERE vehicle_parts.vehicle_id = $1
    ORDER BY parts.name, parts.id
"#;

fn split_parts(parts: &[PartAvailability]) -> (Vec<i32>, Vec<bool>) {
    parts.iter().map(|p| (p.part_id, p.available)).unzip()
}

#[async_trait]
impl VehicleRepository for PgStore {
    async fn create_with_parts(&self, spec: &VehicleSpec, parts: &[PartAvailability]) -> AppResult<i32> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("starting add-vehicle transaction"))?;

        let catalog_id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id FROM vehicles
            WHERE year = $1 AND make = $2 AND model = $3 AND "trim" = $4
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(spec.year)
        .bind(&spec.make)
        .bind(&spec.model)
        .bind(&spec.trim)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("resolving catalog vehicle"))?
        .ok_or_else(|| not_found_error("vehicle"))?;

        let added_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO added_vehicles (vehicle_id) VALUES ($1) RETURNING id",
        )
        .bind(catalog_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("inserting added vehicle"))?;

        let (part_ids, flags) = split_parts(parts);
        sqlx::query(
            r#"
            INSERT INTO vehicle_parts (vehicle_id, part_id, available)
            SELECT $1, p.part_id, p.available
            FROM UNNEST($2::int4[], $3::bool[]) AS p(part_id, available)
            "#,
        )
        .bind(added_id)
        .bind(part_ids)
        .bind(flags)
        .execute(&mut *tx)
        .await
        .map_err(part_write_error("inserting vehicle parts"))?;

        tx.commit()
            .await
            .map_err(db_error("committing add-vehicle transaction"))?;

        Ok(added_id)
    }

    async fn find_with_parts(
        &self,
        id: i32,
    ) -> AppResult<Option<(AddedVehicleDetail, Vec<VehiclePartDetail>)>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("starting vehicle-detail transaction"))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(db_error("setting vehicle-detail isolation"))?;

        let vehicle = sqlx::query_as::<_, AddedVehicleDetail>(
            r#"
            SELECT added_vehicles.id, added_vehicles.vehicle_id,
                   vehicles.year, vehicles.make, vehicles.model, vehicles."trim"
            FROM added_vehicles
            JOIN vehicles ON added_vehicles.vehicle_id = vehicles.id
            WHERE added_vehicles.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("finding added vehicle"))?;

        let Some(vehicle) = vehicle else {
            return Ok(None);
        };

        let parts = sqlx::query_as::<_, VehiclePartDetail>(PARTS_OF_VEHICLE)
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(db_error("listing vehicle parts"))?;

        tx.commit()
            .await
            .map_err(db_error("committing vehicle-detail transaction"))?;

        Ok(Some((vehicle, parts)))
    }

    async fn find_parts(&self, id: i32) -> AppResult<Vec<VehiclePartDetail>> {
        let parts = sqlx::query_as::<_, VehiclePartDetail>(PARTS_OF_VEHICLE)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing vehicle parts"))?;

        Ok(parts)
    }

    async fn set_parts_availability(&self, id: i32, parts: &[PartAvailability]) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("starting update-parts transaction"))?;

        sqlx::query_scalar::<_, i32>("SELECT id FROM added_vehicles WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("locking added vehicle"))?
            .ok_or_else(|| not_found_error("vehicle"))?;

        let (part_ids, flags) = split_parts(parts);

        let recorded: HashSet<i32> = sqlx::query_scalar::<_, i32>(
            "SELECT part_id FROM vehicle_parts WHERE vehicle_id = $1 AND part_id = ANY($2)",
        )
        .bind(id)
        .bind(&part_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(db_error("checking recorded vehicle parts"))?
        .into_iter()
        .collect();

        let unknown: Vec<i32> = part_ids.iter().copied().filter(|p| !recorded.contains(p)).collect();
        if !unknown.is_empty() {
            return Err(validation_error(format!(
                "vehicle {} has no recorded parts with ids {:?}",
                id, unknown
            )));
        }

        let updated = sqlx::query(
            r#"
            UPDATE vehicle_parts
            SET available = p.available
            FROM UNNEST($2::int4[], $3::bool[]) AS p(part_id, available)
            WHERE vehicle_parts.vehicle_id = $1 AND vehicle_parts.part_id = p.part_id
            "#,
        )
        .bind(id)
        .bind(&part_ids)
        .bind(flags)
        .execute(&mut *tx)
        .await
        .map_err(db_error("updating vehicle parts"))?
        .rows_affected();

        tx.commit()
            .await
            .map_err(db_error("committing update-parts transaction"))?;

        Ok(updated)
    }

    async fn delete_with_parts(&self, id: i32) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("starting delete-vehicle transaction"))?;

        sqlx::query_scalar::<_, i32>("SELECT id FROM added_vehicles WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("locking added vehicle"))?
            .ok_or_else(|| not_found_error("vehicle"))?;

        let removed = sqlx::query("DELETE FROM vehicle_parts WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("deleting vehicle parts"))?
            .rows_affected();

        sqlx::query("DELETE FROM added_vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("deleting added vehicle"))?;

        tx.commit()
            .await
            .map_err(db_error("committing delete-vehicle transaction"))?;

        Ok(removed)
    }
}
