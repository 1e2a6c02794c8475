//! Selección en cascada año → marca → modelo → versión
//!
//! Cada consulta dependiente lleva un número de generación. Una respuesta
//! solo se aplica si su generación sigue siendo la pendiente para ese
//! nivel; si el usuario cambió la selección anterior mientras tanto, se
//! descarta.

use crate::client::error::{ClientError, ClientResult};
use crate::models::catalog::VehicleSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    NoYear,
    YearSelected,
    MakeSelected,
    ModelSelected,
    TrimSelected,
}

/// Desplegable dependiente que se carga desde el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentLevel {
    Make,
    Model,
    Trim,
}

/// Consulta emitida para un nivel, con los filtros vigentes al emitirla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub level: DependentLevel,
    pub generation: u64,
    pub year: i32,
    pub make: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    options: Vec<String>,
    loading: bool,
    pending: Option<u64>,
}

impl Dropdown {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn clear(&mut self) {
        self.options.clear();
        self.loading = false;
        self.pending = None;
    }

    fn start(&mut self, generation: u64) {
        self.options.clear();
        self.loading = true;
        self.pending = Some(generation);
    }
}

#[derive(Debug, Clone, Default)]
pub struct VehicleSelection {
    years: Vec<i32>,
    year: Option<i32>,
    make: Option<String>,
    model: Option<String>,
    trim: Option<String>,
    makes: Dropdown,
    models: Dropdown,
    trims: Dropdown,
    generation: u64,
}

impl VehicleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_years(&mut self, years: Vec<i32>) {
        self.years = years;
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn makes(&self) -> &Dropdown {
        &self.makes
    }

    pub fn models(&self) -> &Dropdown {
        &self.models
    }

    pub fn trims(&self) -> &Dropdown {
        &self.trims
    }

    pub fn stage(&self) -> SelectionStage {
        match (&self.year, &self.make, &self.model, &self.trim) {
            (None, _, _, _) => SelectionStage::NoYear,
            (Some(_), None, _, _) => SelectionStage::YearSelected,
            (Some(_), Some(_), None, _) => SelectionStage::MakeSelected,
            (Some(_), Some(_), Some(_), None) => SelectionStage::ModelSelected,
            (Some(_), Some(_), Some(_), Some(_)) => SelectionStage::TrimSelected,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage() == SelectionStage::TrimSelected
    }

    /// Vehículo elegido, solo con la selección completa
    pub fn selected_vehicle(&self) -> Option<VehicleSpec> {
        match (&self.year, &self.make, &self.model, &self.trim) {
            (Some(year), Some(make), Some(model), Some(trim)) => Some(VehicleSpec {
                year: *year,
                make: make.clone(),
                model: model.clone(),
                trim: trim.clone(),
            }),
            _ => None,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn select_year(&mut self, year: i32) -> ClientResult<FetchTicket> {
        if !self.years.is_empty() && !self.years.contains(&year) {
            return Err(ClientError::InvalidSelection(format!("unknown year {}", year)));
        }

        self.year = Some(year);
        self.make = None;
        self.model = None;
        self.trim = None;
        self.models.clear();
        self.trims.clear();

        let generation = self.next_generation();
        self.makes.start(generation);

        Ok(FetchTicket {
            level: DependentLevel::Make,
            generation,
            year,
            make: None,
            model: None,
        })
    }

    pub fn select_make(&mut self, make: &str) -> ClientResult<FetchTicket> {
        let year = self
            .year
            .ok_or_else(|| ClientError::InvalidSelection("select a year first".to_string()))?;
        if !self.makes.options.iter().any(|m| m == make) {
            return Err(ClientError::InvalidSelection(format!("unknown make '{}'", make)));
        }

        self.make = Some(make.to_string());
        self.model = None;
        self.trim = None;
        self.trims.clear();

        let generation = self.next_generation();
        self.models.start(generation);

        Ok(FetchTicket {
            level: DependentLevel::Model,
            generation,
            year,
            make: self.make.clone(),
            model: None,
        })
    }

    pub fn select_model(&mut self, model: &str) -> ClientResult<FetchTicket> {
        let (year, make) = match (self.year, &self.make) {
            (Some(year), Some(make)) => (year, make.clone()),
            _ => return Err(ClientError::InvalidSelection("select a make first".to_string())),
        };
        if !self.models.options.iter().any(|m| m == model) {
            return Err(ClientError::InvalidSelection(format!("unknown model '{}'", model)));
        }

        self.model = Some(model.to_string());
        self.trim = None;

        let generation = self.next_generation();
        self.trims.start(generation);

        Ok(FetchTicket {
            level: DependentLevel::Trim,
            generation,
            year,
            make: Some(make),
            model: self.model.clone(),
        })
    }

    pub fn select_trim(&mut self, trim: &str) -> ClientResult<()> {
        if self.model.is_none() {
            return Err(ClientError::InvalidSelection("select a model first".to_string()));
        }
        if !self.trims.options.iter().any(|t| t == trim) {
            return Err(ClientError::InvalidSelection(format!("unknown trim '{}'", trim)));
        }

        self.trim = Some(trim.to_string());
        Ok(())
    }

    /// Aplica la respuesta de una consulta.
    ///
    /// `Ok(true)` si se aplicó, `Ok(false)` si era obsoleta y se descartó.
    /// Un error vigente deja el desplegable vacío y se devuelve al llamador.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: ClientResult<Vec<String>>) -> ClientResult<bool> {
        let dropdown = match ticket.level {
            DependentLevel::Make => &mut self.makes,
            DependentLevel::Model => &mut self.models,
            DependentLevel::Trim => &mut self.trims,
        };
        if dropdown.pending != Some(ticket.generation) {
            tracing::debug!("⏭️ Respuesta obsoleta descartada ({:?} #{})", ticket.level, ticket.generation);
            return Ok(false);
        }

        dropdown.pending = None;
        dropdown.loading = false;
        match result {
            Ok(options) => {
                dropdown.options = options;
                Ok(true)
            }
            Err(e) => {
                dropdown.options.clear();
                Err(e)
            }
        }
    }
}
