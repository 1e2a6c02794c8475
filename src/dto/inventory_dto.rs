use serde::{Deserialize, Serialize};

use crate::models::added_vehicle::InventoryVehicle;

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub inventory: Vec<InventoryVehicle>,
}
