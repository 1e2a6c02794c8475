//! Modelos del inventario
//!
//! Un vehículo agregado es una unidad física del desguace creada a partir de
//! un vehículo del catálogo. Sus piezas se registran en vehicle_parts con una
//! bandera de disponibilidad.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo agregado - mapea a la tabla added_vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AddedVehicle {
    pub id: i32,
    pub vehicle_id: i32,
}

/// Fila de disponibilidad - mapea a la tabla vehicle_parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VehiclePart {
    pub id: i32,
    pub vehicle_id: i32,
    pub part_id: i32,
    pub available: bool,
}

/// Vehículo agregado con los atributos de su vehículo de catálogo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AddedVehicleDetail {
    pub id: i32,
    pub vehicle_id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
}

/// Pieza de un vehículo agregado con su disponibilidad.
/// `id` es el identificador de la pieza del catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VehiclePartDetail {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub available: bool,
}

/// Fila del listado de inventario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct InventoryVehicle {
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: String,
}

/// Estadísticas agregadas del inventario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub vehicle_count: i64,
    pub part_count: i64,
    pub recent_vehicles: Vec<InventoryVehicle>,
}

/// Disponibilidad a escribir para una pieza
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartAvailability {
    pub part_id: i32,
    pub available: bool,
}
