//! Formulario de alta de vehículos
//!
//! Combina la selección en cascada con el editor de piezas. Las piezas se
//! cargan una sola vez, independientemente del vehículo elegido. Cualquier
//! fallo se añade a la lista de errores y el formulario sigue usable.

use tracing::{info, warn};

use crate::client::catalog_source::CatalogSource;
use crate::client::error::{ClientError, ClientResult};
use crate::client::parts_editor::PartsEditor;
use crate::client::selection::{DependentLevel, FetchTicket, VehicleSelection};
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::added_vehicle::InventoryVehicle;

pub struct AddVehicleForm<S: CatalogSource> {
    source: S,
    selection: VehicleSelection,
    parts: Option<PartsEditor>,
    inventory: Vec<InventoryVehicle>,
    submitting: bool,
    errors: Vec<String>,
}

impl<S: CatalogSource> AddVehicleForm<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            selection: VehicleSelection::new(),
            parts: None,
            inventory: Vec::new(),
            submitting: false,
            errors: Vec::new(),
        }
    }

    /// Carga años, categorías y piezas en paralelo
    pub async fn load(&mut self) {
        let (years, categories, parts) = tokio::join!(
            self.source.years(),
            self.source.part_categories(),
            self.source.parts(),
        );

        match years {
            Ok(years) => self.selection.set_years(years),
            Err(e) => self.push_error("loading years", e),
        }

        match (categories, parts) {
            (Ok(categories), Ok(parts)) => {
                self.parts = Some(PartsEditor::for_new_vehicle(categories, parts));
            }
            (Err(e), _) | (_, Err(e)) => self.push_error("loading parts", e),
        }
    }

    pub fn selection(&self) -> &VehicleSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut VehicleSelection {
        &mut self.selection
    }

    /// El editor solo se muestra con la selección completa
    pub fn parts(&self) -> Option<&PartsEditor> {
        self.parts.as_ref().filter(|_| self.selection.is_complete())
    }

    pub fn inventory(&self) -> &[InventoryVehicle] {
        &self.inventory
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn push_error(&mut self, action: &str, error: ClientError) {
        warn!("⚠️ Error {}: {}", action, error);
        self.errors.push(format!("Error {}: {}", action, error));
    }

    /// Ejecuta la consulta de un ticket sin tocar el estado
    pub async fn fetch_options(&self, ticket: &FetchTicket) -> ClientResult<Vec<String>> {
        let make = ticket.make.as_deref().unwrap_or_default();
        let model = ticket.model.as_deref().unwrap_or_default();
        match ticket.level {
            DependentLevel::Make => self.source.makes(ticket.year).await,
            DependentLevel::Model => self.source.models(ticket.year, make).await,
            DependentLevel::Trim => self.source.trims(ticket.year, make, model).await,
        }
    }

    /// Aplica la respuesta de un ticket; las obsoletas se ignoran
    pub fn apply_options(&mut self, ticket: &FetchTicket, result: ClientResult<Vec<String>>) {
        if let Err(e) = self.selection.resolve(ticket, result) {
            let action = match ticket.level {
                DependentLevel::Make => "loading makes",
                DependentLevel::Model => "loading models",
                DependentLevel::Trim => "loading trims",
            };
            self.push_error(action, e);
        }
    }

    async fn follow(&mut self, ticket: ClientResult<FetchTicket>) {
        match ticket {
            Ok(ticket) => {
                let result = self.fetch_options(&ticket).await;
                self.apply_options(&ticket, result);
            }
            Err(e) => self.push_error("selecting vehicle", e),
        }
    }

    pub async fn choose_year(&mut self, year: i32) {
        let ticket = self.selection.select_year(year);
        self.follow(ticket).await;
    }

    pub async fn choose_make(&mut self, make: &str) {
        let ticket = self.selection.select_make(make);
        self.follow(ticket).await;
    }

    pub async fn choose_model(&mut self, model: &str) {
        let ticket = self.selection.select_model(model);
        self.follow(ticket).await;
    }

    pub fn choose_trim(&mut self, trim: &str) {
        if let Err(e) = self.selection.select_trim(trim) {
            self.push_error("selecting vehicle", e);
        }
    }

    pub fn toggle_part(&mut self, part_id: i32) {
        let result = match self.parts.as_mut() {
            Some(editor) => editor.toggle_part(part_id).map(|_| ()),
            None => Err(ClientError::InvalidSelection("parts are not loaded".to_string())),
        };
        if let Err(e) = result {
            self.push_error("toggling part", e);
        }
    }

    pub fn toggle_category(&mut self, category_id: i32) -> bool {
        self.parts
            .as_mut()
            .map(|editor| editor.toggle_category(category_id))
            .unwrap_or(false)
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && self.parts.is_some() && !self.submitting
    }

    /// Envía el vehículo y, si se creó, recarga el inventario
    pub async fn submit(&mut self) -> Option<i32> {
        if !self.can_submit() {
            self.push_error(
                "submitting vehicle",
                ClientError::InvalidSelection("select year, make, model and trim first".to_string()),
            );
            return None;
        }

        let (vehicle, editor) = match (self.selection.selected_vehicle(), self.parts.as_ref()) {
            (Some(vehicle), Some(editor)) => (vehicle, editor),
            _ => return None,
        };
        let request = CreateVehicleRequest {
            year: Some(vehicle.year),
            make: Some(vehicle.make),
            model: Some(vehicle.model),
            trim: Some(vehicle.trim),
            parts: Some(editor.create_payload()),
        };

        self.submitting = true;
        let created = self.source.create_vehicle(&request).await;
        self.submitting = false;

        let id = match created {
            Ok(response) => {
                info!("✅ {}", response.message);
                response.id
            }
            Err(e) => {
                self.push_error("submitting vehicle", e);
                return None;
            }
        };

        match self.source.inventory().await {
            Ok(inventory) => self.inventory = inventory,
            Err(e) => self.push_error("loading inventory", e),
        }
        Some(id)
    }
}
