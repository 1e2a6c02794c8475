//! Formulario de consulta y edición de un vehículo agregado
//!
//! Los datos del vehículo son de solo lectura; se editan las piezas y se
//! guardan con PUT. El borrado pide confirmación antes de enviar DELETE.

use tracing::{info, warn};

use crate::client::catalog_source::CatalogSource;
use crate::client::error::{ClientError, ClientResult};
use crate::client::parts_editor::PartsEditor;
use crate::dto::vehicle_dto::UpdateVehiclePartsRequest;
use crate::models::added_vehicle::AddedVehicleDetail;

pub struct ViewVehicleForm<S: CatalogSource> {
    source: S,
    vehicle_id: i32,
    vehicle: Option<AddedVehicleDetail>,
    parts: Option<PartsEditor>,
    confirming_delete: bool,
    deleted: bool,
    errors: Vec<String>,
}

impl<S: CatalogSource> ViewVehicleForm<S> {
    pub fn new(source: S, vehicle_id: i32) -> Self {
        Self {
            source,
            vehicle_id,
            vehicle: None,
            parts: None,
            confirming_delete: false,
            deleted: false,
            errors: Vec::new(),
        }
    }

    /// Carga el vehículo y las categorías en paralelo
    pub async fn load(&mut self) -> ClientResult<()> {
        let (detail, categories) = tokio::join!(
            self.source.get_vehicle(self.vehicle_id),
            self.source.part_categories(),
        );
        let (detail, categories) = match (detail, categories) {
            (Ok(detail), Ok(categories)) => (detail, categories),
            (Err(e), _) | (_, Err(e)) => {
                self.push_error("loading", &e);
                return Err(e);
            }
        };

        self.parts = Some(PartsEditor::for_recorded_parts(categories, detail.parts));
        self.vehicle = Some(detail.vehicle);
        Ok(())
    }

    pub fn vehicle(&self) -> Option<&AddedVehicleDetail> {
        self.vehicle.as_ref()
    }

    pub fn parts(&self) -> Option<&PartsEditor> {
        self.parts.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn push_error(&mut self, action: &str, error: &ClientError) {
        warn!("⚠️ Error {} vehicle {}: {}", action, self.vehicle_id, error);
        self.errors.push(format!("Error {} vehicle: {}", action, error));
    }

    pub fn toggle_part(&mut self, part_id: i32) {
        let result = match self.parts.as_mut() {
            Some(editor) => editor.toggle_part(part_id).map(|_| ()),
            None => Err(ClientError::InvalidSelection("vehicle is not loaded".to_string())),
        };
        if let Err(e) = result {
            self.push_error("editing", &e);
        }
    }

    pub fn toggle_category(&mut self, category_id: i32) -> bool {
        self.parts
            .as_mut()
            .map(|editor| editor.toggle_category(category_id))
            .unwrap_or(false)
    }

    /// Guarda la disponibilidad de todas las piezas mostradas
    pub async fn save(&mut self) -> bool {
        let Some(editor) = self.parts.as_ref() else {
            self.push_error(
                "saving",
                &ClientError::InvalidSelection("vehicle is not loaded".to_string()),
            );
            return false;
        };
        let request = UpdateVehiclePartsRequest {
            parts: Some(editor.update_payload()),
        };

        match self.source.update_vehicle_parts(self.vehicle_id, &request).await {
            Ok(response) => {
                info!("✅ {}", response.message);
                true
            }
            Err(e) => {
                self.push_error("updating", &e);
                false
            }
        }
    }

    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Envía el borrado; solo tras `request_delete`
    pub async fn confirm_delete(&mut self) -> bool {
        if !self.confirming_delete {
            return false;
        }
        self.confirming_delete = false;

        match self.source.delete_vehicle(self.vehicle_id).await {
            Ok(response) => {
                info!("🗑️ {}", response.message);
                self.deleted = true;
                true
            }
            Err(e) => {
                self.push_error("deleting", &e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::InProcessSource;
    use crate::models::added_vehicle::PartAvailability;
    use crate::models::catalog::VehicleSpec;
    use crate::repositories::VehicleRepository;

    async fn source_with_civic() -> InProcessSource {
        let source = InProcessSource::seeded().await;
        let civic = VehicleSpec {
            year: 2020,
            make: "Honda".into(),
            model: "Civic".into(),
            trim: "EX".into(),
        };
        let parts = [
            PartAvailability { part_id: 1, available: true },
            PartAvailability { part_id: 2, available: true },
        ];
        source.store.create_with_parts(&civic, &parts).await.unwrap();
        source
    }

    #[tokio::test]
    async fn test_load_toggle_and_save() {
        let mut form = ViewVehicleForm::new(source_with_civic().await, 1);
        form.load().await.unwrap();
        assert_eq!(form.vehicle().unwrap().model, "Civic");
        assert_eq!(form.parts().unwrap().available_count(), 2);

        form.toggle_part(2);
        assert!(form.save().await);
        assert!(form.errors().is_empty());

        let parts = form.source.store.find_parts(1).await.unwrap();
        assert!(parts.iter().find(|p| p.id == 1).unwrap().available);
        assert!(!parts.iter().find(|p| p.id == 2).unwrap().available);
    }

    #[tokio::test]
    async fn test_missing_vehicle_fails_to_load() {
        let mut form = ViewVehicleForm::new(InProcessSource::seeded().await, 7);
        match form.load().await {
            Err(ClientError::Api { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(form.errors().len(), 1);
        assert!(form.errors()[0].contains("Error loading vehicle"));
        assert!(form.errors()[0].contains("vehicle not found"));

        assert!(!form.save().await);
        assert_eq!(form.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let mut form = ViewVehicleForm::new(source_with_civic().await, 1);
        form.load().await.unwrap();

        assert!(!form.confirm_delete().await);
        form.request_delete();
        form.cancel_delete();
        assert!(!form.confirm_delete().await);

        form.request_delete();
        assert!(form.confirm_delete().await);
        assert!(form.is_deleted());
        assert_eq!(form.source.store.vehicle_part_rows(1).await, 0);
    }
}
