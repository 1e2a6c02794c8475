use tracing::info;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, MessageResponse, UpdateVehiclePartsRequest,
    VehicleDetailResponse,
};
use crate::models::added_vehicle::PartAvailability;
use crate::models::catalog::VehicleSpec;
use crate::repositories::SharedStore;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::{ensure_valid_part_ids, parse_vehicle_id};

/// Alta, consulta, actualización y baja de vehículos agregados
pub struct VehicleController {
    store: SharedStore,
}

impl VehicleController {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// El request ya viene validado por `ValidatedJson`
    pub async fn create(&self, request: CreateVehicleRequest) -> Result<CreateVehicleResponse, AppError> {
        let (year, make, model, trim, parts) = match request {
            CreateVehicleRequest {
                year: Some(year),
                make: Some(make),
                model: Some(model),
                trim: Some(trim),
                parts: Some(parts),
            } => (year, make, model, trim, parts),
            _ => return Err(validation_error("year, make, model, trim and parts are required")),
        };

        ensure_valid_part_ids(parts.iter().map(|p| p.id))?;

        let spec = VehicleSpec {
            year,
            make,
            model,
            trim,
        };
        let parts: Vec<PartAvailability> = parts.iter().map(PartAvailability::from).collect();

        let id = self.store.create_with_parts(&spec, &parts).await?;
        info!("✅ Vehículo {} agregado con id {} ({} piezas)", spec, id, parts.len());

        Ok(CreateVehicleResponse {
            message: "Vehicle added successfully".to_string(),
            id,
        })
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<VehicleDetailResponse, AppError> {
        let id = parse_vehicle_id(raw_id)?;

        let (vehicle, parts) = self
            .store
            .find_with_parts(id)
            .await?
            .ok_or_else(|| not_found_error("vehicle"))?;

        Ok(VehicleDetailResponse { vehicle, parts })
    }

    pub async fn update_parts(
        &self,
        raw_id: &str,
        request: UpdateVehiclePartsRequest,
    ) -> Result<MessageResponse, AppError> {
        let id = parse_vehicle_id(raw_id)?;
        let parts = request
            .parts
            .ok_or_else(|| validation_error("parts is required"))?;

        ensure_valid_part_ids(parts.iter().map(|p| p.id))?;
        let changes: Vec<PartAvailability> = parts.iter().map(PartAvailability::from).collect();

        let updated = self.store.set_parts_availability(id, &changes).await?;
        info!("🔄 Vehículo {}: {} piezas actualizadas", id, updated);

        Ok(MessageResponse::new("Vehicle parts updated successfully"))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<MessageResponse, AppError> {
        let id = parse_vehicle_id(raw_id)?;

        let removed = self.store.delete_with_parts(id).await?;
        info!("🗑️ Vehículo {} eliminado junto con {} piezas", id, removed);

        Ok(MessageResponse::new("Vehicle deleted successfully"))
    }
}
