use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::flags::{lenient_year, Availability, AvailabilityBit};
use crate::models::added_vehicle::{AddedVehicleDetail, PartAvailability, VehiclePartDetail};
use crate::utils::validation::validate_not_empty;

// Request para agregar un vehículo al inventario
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(default, deserialize_with = "lenient_year")]
    #[validate(required(message = "year is required"))]
    pub year: Option<i32>,

    #[validate(required(message = "make is required"), custom = "validate_not_empty")]
    pub make: Option<String>,

    #[validate(required(message = "model is required"), custom = "validate_not_empty")]
    pub model: Option<String>,

    #[validate(required(message = "trim is required"), custom = "validate_not_empty")]
    pub trim: Option<String>,

    #[validate(
        required(message = "parts is required"),
        length(min = 1, message = "parts must be a non-empty array")
    )]
    pub parts: Option<Vec<NewVehiclePart>>,
}

// Pieza enviada al crear; name y category_id se aceptan pero no se usan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehiclePart {
    pub id: i32,
    pub available: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
}

impl From<&NewVehiclePart> for PartAvailability {
    fn from(part: &NewVehiclePart) -> Self {
        Self {
            part_id: part.id,
            available: part.available.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVehicleResponse {
    pub message: String,
    pub id: i32,
}

// Response de un vehículo agregado con sus piezas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDetailResponse {
    pub vehicle: AddedVehicleDetail,
    pub parts: Vec<VehiclePartDetail>,
}

// Request para actualizar la disponibilidad de piezas
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVehiclePartsRequest {
    #[validate(
        required(message = "parts is required"),
        length(min = 1, message = "parts must be a non-empty array")
    )]
    pub parts: Option<Vec<PartAvailabilityUpdate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartAvailabilityUpdate {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub available: AvailabilityBit,
}

impl From<&PartAvailabilityUpdate> for PartAvailability {
    fn from(part: &PartAvailabilityUpdate) -> Self {
        Self {
            part_id: part.id,
            available: part.available.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
