//! Almacenamiento en memoria
//!
//! Mismas reglas que el esquema PostgreSQL: claves foráneas, unicidad de
//! (vehículo, pieza) y escrituras atómicas. Cada operación valida todo
//! antes de mutar, bajo un único lock de escritura.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tokio::sync::RwLock;

use crate::database::seed::CatalogSeed;
use crate::models::{
    AddedVehicle, AddedVehicleDetail, CatalogVehicle, InventoryVehicle, Part, PartAvailability,
    PartCategory, User, VehiclePart, VehiclePartDetail, VehicleSpec,
};
use crate::repositories::{CatalogRepository, InventoryRepository, UserRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};

#[derive(Default)]
struct Tables {
    vehicles: Vec<CatalogVehicle>,
    categories: Vec<PartCategory>,
    parts: Vec<Part>,
    added_vehicles: BTreeMap<i32, AddedVehicle>,
    vehicle_parts: Vec<VehiclePart>,
    users: Vec<User>,
    next_added_id: i32,
    next_vehicle_part_id: i32,
}

impl Tables {
    fn next_id<T>(rows: &[T], id: impl Fn(&T) -> i32) -> i32 {
        rows.iter().map(id).max().unwrap_or(0) + 1
    }

    fn detail(&self, added: &AddedVehicle) -> Option<AddedVehicleDetail> {
        self.vehicles
            .iter()
            .find(|v| v.id == added.vehicle_id)
            .map(|v| AddedVehicleDetail {
                id: added.id,
                vehicle_id: v.id,
                year: v.year,
                make: v.make.clone(),
                model: v.model.clone(),
                trim: v.trim.clone(),
            })
    }

    /// Piezas registradas de un vehículo, por nombre e id
    fn parts_of(&self, vehicle_id: i32) -> Vec<VehiclePartDetail> {
        let mut parts: Vec<VehiclePartDetail> = self
            .vehicle_parts
            .iter()
            .filter(|vp| vp.vehicle_id == vehicle_id)
            .filter_map(|vp| {
                self.parts.iter().find(|p| p.id == vp.part_id).map(|p| VehiclePartDetail {
                    id: p.id,
                    name: p.name.clone(),
                    category_id: p.category_id,
                    available: vp.available,
                })
            })
            .collect();
        parts.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        parts
    }

    fn inventory_row(&self, added: &AddedVehicle) -> Option<InventoryVehicle> {
        self.detail(added).map(|d| InventoryVehicle {
            id: d.id,
            year: d.year,
            make: d.make,
            model: d.model,
            trim: d.trim,
        })
    }

    fn distinct<F>(&self, keep: impl Fn(&CatalogVehicle) -> bool, field: F) -> Vec<String>
    where
        F: Fn(&CatalogVehicle) -> &str,
    {
        self.vehicles
            .iter()
            .filter(|&v| keep(v))
            .map(|v| field(v).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Store en memoria para pruebas y para arrancar sin base de datos
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga los datos de referencia del catálogo
    pub async fn seed(&self, seed: &CatalogSeed) {
        let mut tables = self.tables.write().await;

        for spec in &seed.vehicles {
            let id = Tables::next_id(&tables.vehicles, |v| v.id);
            tables.vehicles.push(CatalogVehicle {
                id,
                year: spec.year,
                make: spec.make.clone(),
                model: spec.model.clone(),
                trim: spec.trim.clone(),
            });
        }

        for name in &seed.categories {
            let id = Tables::next_id(&tables.categories, |c| c.id);
            tables.categories.push(PartCategory { id, name: name.clone() });
        }

        for part in &seed.parts {
            let category_id = tables
                .categories
                .iter()
                .find(|c| c.name == part.category)
                .map(|c| c.id);
            if let Some(category_id) = category_id {
                let id = Tables::next_id(&tables.parts, |p| p.id);
                tables.parts.push(Part {
                    id,
                    name: part.name.clone(),
                    category_id,
                });
            } else {
                tracing::warn!("⚠️ Pieza '{}' sin categoría '{}', omitida", part.name, part.category);
            }
        }
    }

    /// Número de filas de disponibilidad que referencian un vehículo agregado
    pub async fn vehicle_part_rows(&self, vehicle_id: i32) -> usize {
        let tables = self.tables.read().await;
        tables
            .vehicle_parts
            .iter()
            .filter(|vp| vp.vehicle_id == vehicle_id)
            .count()
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn list_years(&self) -> AppResult<Vec<i32>> {
        let tables = self.tables.read().await;
        let years: BTreeSet<i32> = tables.vehicles.iter().map(|v| v.year).collect();
        Ok(years.into_iter().collect())
    }

    async fn list_makes(&self, year: i32) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables.distinct(|v| v.year == year, |v| v.make.as_str()))
    }

    async fn list_models(&self, year: i32, make: &str) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables.distinct(|v| v.year == year && v.make == make, |v| v.model.as_str()))
    }

    async fn list_trims(&self, year: i32, make: &str, model: &str) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables.distinct(
            |v| v.year == year && v.make == make && v.model == model,
            |v| v.trim.as_str(),
        ))
    }

    async fn list_part_categories(&self) -> AppResult<Vec<PartCategory>> {
        let tables = self.tables.read().await;
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn list_parts(&self) -> AppResult<Vec<Part>> {
        let tables = self.tables.read().await;
        let mut parts = tables.parts.clone();
        parts.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(parts)
    }
}

#[async_trait]
impl VehicleRepository for MemoryStore {
    async fn create_with_parts(&self, spec: &VehicleSpec, parts: &[PartAvailability]) -> AppResult<i32> {
        let mut tables = self.tables.write().await;

        let catalog_id = tables
            .vehicles
            .iter()
            .find(|v| spec.matches(v))
            .map(|v| v.id)
            .ok_or_else(|| not_found_error("vehicle"))?;

        let known: HashSet<i32> = tables.parts.iter().map(|p| p.id).collect();
        if parts.iter().any(|p| !known.contains(&p.part_id)) {
            return Err(AppError::BadRequest("one or more parts do not exist".to_string()));
        }
        let mut seen = HashSet::new();
        if !parts.iter().all(|p| seen.insert(p.part_id)) {
            return Err(AppError::BadRequest(
                "a part can only be recorded once per vehicle".to_string(),
            ));
        }

        tables.next_added_id += 1;
        let added_id = tables.next_added_id;
        tables.added_vehicles.insert(
            added_id,
            AddedVehicle {
                id: added_id,
                vehicle_id: catalog_id,
            },
        );

        for part in parts {
            tables.next_vehicle_part_id += 1;
            let id = tables.next_vehicle_part_id;
            tables.vehicle_parts.push(VehiclePart {
                id,
                vehicle_id: added_id,
                part_id: part.part_id,
                available: part.available,
            });
        }

        Ok(added_id)
    }

    async fn find_with_parts(
        &self,
        id: i32,
    ) -> AppResult<Option<(AddedVehicleDetail, Vec<VehiclePartDetail>)>> {
        let tables = self.tables.read().await;
        Ok(tables
            .added_vehicles
            .get(&id)
            .and_then(|a| tables.detail(a))
            .map(|detail| (detail, tables.parts_of(id))))
    }

    async fn find_parts(&self, id: i32) -> AppResult<Vec<VehiclePartDetail>> {
        Ok(self.tables.read().await.parts_of(id))
    }

    async fn set_parts_availability(&self, id: i32, parts: &[PartAvailability]) -> AppResult<u64> {
        let mut tables = self.tables.write().await;

        if !tables.added_vehicles.contains_key(&id) {
            return Err(not_found_error("vehicle"));
        }

        let recorded: HashSet<i32> = tables
            .vehicle_parts
            .iter()
            .filter(|vp| vp.vehicle_id == id)
            .map(|vp| vp.part_id)
            .collect();
        let unknown: Vec<i32> = parts
            .iter()
            .map(|p| p.part_id)
            .filter(|p| !recorded.contains(p))
            .collect();
        if !unknown.is_empty() {
            return Err(validation_error(format!(
                "vehicle {} has no recorded parts with ids {:?}",
                id, unknown
            )));
        }

        let mut updated = 0;
        for row in tables.vehicle_parts.iter_mut().filter(|vp| vp.vehicle_id == id) {
            if let Some(change) = parts.iter().find(|p| p.part_id == row.part_id) {
                row.available = change.available;
                updated += 1;
            }
        }

        Ok(updated)
    }

    async fn delete_with_parts(&self, id: i32) -> AppResult<u64> {
        let mut tables = self.tables.write().await;

        if !tables.added_vehicles.contains_key(&id) {
            return Err(not_found_error("vehicle"));
        }

        let before = tables.vehicle_parts.len();
        tables.vehicle_parts.retain(|vp| vp.vehicle_id != id);
        let removed = (before - tables.vehicle_parts.len()) as u64;
        tables.added_vehicles.remove(&id);

        Ok(removed)
    }
}

#[async_trait]
impl InventoryRepository for MemoryStore {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryVehicle>> {
        let tables = self.tables.read().await;
        Ok(tables
            .added_vehicles
            .values()
            .filter_map(|a| tables.inventory_row(a))
            .collect())
    }

    async fn count_vehicles(&self) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.added_vehicles.len() as i64)
    }

    async fn count_available_parts(&self) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.vehicle_parts.iter().filter(|vp| vp.available).count() as i64)
    }

    async fn recent_vehicles(&self, limit: i64) -> AppResult<Vec<InventoryVehicle>> {
        let tables = self.tables.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables
            .added_vehicles
            .values()
            .rev()
            .filter_map(|a| tables.inventory_row(a))
            .take(limit)
            .collect())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == username) {
            return Err(AppError::Conflict(format!(
                "username '{}' is already taken",
                username
            )));
        }

        let user = User {
            id: Tables::next_id(&tables.users, |u| u.id),
            username: username.to_string(),
            password: password_hash.to_string(),
            created_date: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }
}
