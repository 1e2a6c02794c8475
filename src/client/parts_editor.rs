//! Matriz de piezas agrupadas por categoría
//!
//! Al agregar un vehículo todas las piezas empiezan disponibles. Al ver un
//! vehículo existente la disponibilidad viene de sus filas registradas.

use std::collections::{HashMap, HashSet};

use crate::client::error::{ClientError, ClientResult};
use crate::dto::flags::{Availability, AvailabilityBit};
use crate::dto::vehicle_dto::{NewVehiclePart, PartAvailabilityUpdate};
use crate::models::added_vehicle::VehiclePartDetail;
use crate::models::catalog::{Part, PartCategory};

/// Id del grupo sintético para piezas con categoría desconocida
pub const UNCATEGORIZED_ID: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartToggle {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: PartCategory,
    pub parts: Vec<PartToggle>,
}

#[derive(Debug, Clone, Default)]
pub struct PartsEditor {
    groups: Vec<CategoryGroup>,
    expanded: HashSet<i32>,
}

impl PartsEditor {
    /// Editor para un vehículo nuevo: todo disponible
    pub fn for_new_vehicle(categories: Vec<PartCategory>, parts: Vec<Part>) -> Self {
        let toggles = parts.into_iter().map(|p| PartToggle {
            id: p.id,
            name: p.name,
            category_id: p.category_id,
            available: true,
        });
        Self::group(categories, toggles)
    }

    /// Editor con la disponibilidad registrada de un vehículo
    pub fn for_recorded_parts(categories: Vec<PartCategory>, parts: Vec<VehiclePartDetail>) -> Self {
        let toggles = parts.into_iter().map(|p| PartToggle {
            id: p.id,
            name: p.name,
            category_id: p.category_id,
            available: p.available,
        });
        Self::group(categories, toggles)
    }

    fn group(categories: Vec<PartCategory>, parts: impl Iterator<Item = PartToggle>) -> Self {
        let mut by_category: HashMap<i32, Vec<PartToggle>> = HashMap::new();
        for part in parts {
            by_category.entry(part.category_id).or_default().push(part);
        }

        let mut groups: Vec<CategoryGroup> = categories
            .into_iter()
            .map(|category| CategoryGroup {
                parts: by_category.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect();

        // Las piezas sin categoría conocida se siguen enviando en el payload
        let mut orphans: Vec<PartToggle> = by_category.into_values().flatten().collect();
        if !orphans.is_empty() {
            tracing::warn!("⚠️ {} piezas con categoría desconocida", orphans.len());
            orphans.sort_by_key(|p| p.id);
            groups.push(CategoryGroup {
                category: PartCategory {
                    id: UNCATEGORIZED_ID,
                    name: "Uncategorized".to_string(),
                },
                parts: orphans,
            });
        }

        Self {
            groups,
            expanded: HashSet::new(),
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    fn parts(&self) -> impl Iterator<Item = &PartToggle> {
        self.groups.iter().flat_map(|g| g.parts.iter())
    }

    /// Invierte la disponibilidad y devuelve el nuevo valor
    pub fn toggle_part(&mut self, part_id: i32) -> ClientResult<bool> {
        let part = self
            .groups
            .iter_mut()
            .flat_map(|g| g.parts.iter_mut())
            .find(|p| p.id == part_id)
            .ok_or_else(|| ClientError::InvalidSelection(format!("unknown part {}", part_id)))?;

        part.available = !part.available;
        Ok(part.available)
    }

    pub fn is_available(&self, part_id: i32) -> Option<bool> {
        self.parts().find(|p| p.id == part_id).map(|p| p.available)
    }

    /// Abre o cierra una categoría; devuelve si quedó abierta
    pub fn toggle_category(&mut self, category_id: i32) -> bool {
        if self.expanded.remove(&category_id) {
            return false;
        }
        self.expanded.insert(category_id)
    }

    pub fn is_expanded(&self, category_id: i32) -> bool {
        self.expanded.contains(&category_id)
    }

    pub fn available_count(&self) -> usize {
        self.parts().filter(|p| p.available).count()
    }

    /// Piezas para el alta de un vehículo
    pub fn create_payload(&self) -> Vec<NewVehiclePart> {
        self.parts()
            .map(|p| NewVehiclePart {
                id: p.id,
                available: Availability(p.available),
                name: Some(p.name.clone()),
                category_id: Some(p.category_id),
            })
            .collect()
    }

    /// Piezas para la actualización; la disponibilidad viaja como 0/1
    pub fn update_payload(&self) -> Vec<PartAvailabilityUpdate> {
        self.parts()
            .map(|p| PartAvailabilityUpdate {
                id: p.id,
                name: p.name.clone(),
                category_id: p.category_id,
                available: AvailabilityBit(p.available),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> PartsEditor {
        PartsEditor::for_new_vehicle(
            vec![
                PartCategory { id: 1, name: "Body".into() },
                PartCategory { id: 2, name: "Engine".into() },
            ],
            vec![
                Part { id: 10, name: "Hood".into(), category_id: 1 },
                Part { id: 11, name: "Alternator".into(), category_id: 2 },
                Part { id: 12, name: "Radiator".into(), category_id: 2 },
            ],
        )
    }

    #[test]
    fn test_new_vehicle_starts_all_available() {
        let editor = editor();
        assert_eq!(editor.available_count(), 3);
        assert_eq!(editor.groups()[0].parts.len(), 1);
        assert_eq!(editor.groups()[1].parts.len(), 2);
    }

    #[test]
    fn test_toggle_part_and_payloads() {
        let mut editor = editor();
        assert!(!editor.toggle_part(11).unwrap());
        assert!(editor.toggle_part(99).is_err());

        let create = editor.create_payload();
        let alternator = create.iter().find(|p| p.id == 11).unwrap();
        assert_eq!(alternator.available, Availability(false));
        assert_eq!(alternator.category_id, Some(2));

        let update = serde_json::to_value(editor.update_payload()).unwrap();
        let alternator = update
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == 11)
            .unwrap();
        assert_eq!(alternator["available"], 0);
    }

    #[test]
    fn test_categories_expand_and_collapse() {
        let mut editor = editor();
        assert!(!editor.is_expanded(2));
        assert!(editor.toggle_category(2));
        assert!(editor.is_expanded(2));
        assert!(!editor.toggle_category(2));
        assert!(!editor.is_expanded(2));
    }

    #[test]
    fn test_parts_with_unknown_category_stay_editable() {
        let mut editor = PartsEditor::for_new_vehicle(
            vec![PartCategory { id: 1, name: "Body".into() }],
            vec![
                Part { id: 10, name: "Hood".into(), category_id: 1 },
                Part { id: 20, name: "Tow Hitch".into(), category_id: 9 },
            ],
        );

        let last = editor.groups().last().unwrap();
        assert_eq!(last.category.id, UNCATEGORIZED_ID);
        assert_eq!(last.category.name, "Uncategorized");
        assert_eq!(last.parts[0].id, 20);

        assert!(!editor.toggle_part(20).unwrap());
        let create = editor.create_payload();
        assert_eq!(create.len(), 2);
        let hitch = create.iter().find(|p| p.id == 20).unwrap();
        assert_eq!(hitch.available, Availability(false));
        assert_eq!(hitch.category_id, Some(9));
        assert_eq!(editor.update_payload().len(), 2);
    }

    #[test]
    fn test_recorded_parts_keep_availability() {
        let editor = PartsEditor::for_recorded_parts(
            vec![PartCategory { id: 2, name: "Engine".into() }],
            vec![VehiclePartDetail {
                id: 12,
                name: "Radiator".into(),
                category_id: 2,
                available: false,
            }],
        );
        assert_eq!(editor.is_available(12), Some(false));
        assert_eq!(editor.available_count(), 0);
    }
}
