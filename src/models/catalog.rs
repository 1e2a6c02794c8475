//! Modelos del catálogo
//!
//! Datos de referencia cargados una sola vez: vehículos del catálogo
//! (año/marca/modelo/versión), categorías de piezas y piezas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo del catálogo - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CatalogVehicle {
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
}

/// Categoría de piezas - mapea a la tabla parts_category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PartCategory {
    pub id: i32,
    pub name: String,
}

/// Pieza del catálogo - mapea a la tabla parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Part {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

/// Tupla (año, marca, modelo, versión) que identifica un vehículo del catálogo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpec {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
}

impl VehicleSpec {
    pub fn matches(&self, vehicle: &CatalogVehicle) -> bool {
        vehicle.year == self.year
            && vehicle.make == self.make
            && vehicle.model == self.model
            && vehicle.trim == self.trim
    }
}

impl std::fmt::Display for VehicleSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.make, self.model, self.trim)
    }
}
