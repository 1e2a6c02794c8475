//! Cliente de formularios
//!
//! Flujo de alta con selección en cascada y matriz de piezas, y flujo de
//! consulta/edición de un vehículo agregado. Los formularios hablan con el
//! servidor a través de `CatalogSource`.

pub mod add_vehicle_form;
pub mod api_client;
pub mod catalog_source;
pub mod error;
pub mod parts_editor;
pub mod selection;
pub mod view_vehicle_form;

#[cfg(test)]
mod test_support;

pub use add_vehicle_form::AddVehicleForm;
pub use api_client::InventoryApiClient;
pub use catalog_source::CatalogSource;
pub use error::{ClientError, ClientResult};
pub use parts_editor::PartsEditor;
pub use selection::{SelectionStage, VehicleSelection};
pub use view_vehicle_form::ViewVehicleForm;
