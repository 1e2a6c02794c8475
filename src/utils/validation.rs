//! Utilidades de validación
//!
//! Punto único de validación de entradas: identificadores de ruta,
//! filtros de consulta y reglas compartidas por los DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use validator::ValidationError;

use crate::utils::errors::{validation_error, AppResult};

lazy_static! {
    static ref NUMERIC_ID: Regex = Regex::new(r"^\d+$").expect("static regex is valid");
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir el identificador de un vehículo agregado
pub fn parse_vehicle_id(raw: &str) -> AppResult<i32> {
    if !NUMERIC_ID.is_match(raw) {
        return Err(validation_error("Invalid vehicle ID format"));
    }

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(validation_error("Invalid vehicle ID format")),
    }
}

/// Obtener un filtro de consulta obligatorio y no vacío
pub fn required_param<'a>(value: &'a Option<String>, name: &str) -> AppResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(validation_error(format!("{} is required", name))),
    }
}

/// Obtener el año obligatorio de los filtros de consulta
pub fn required_year(value: &Option<String>) -> AppResult<i32> {
    let raw = required_param(value, "year")?;
    raw.parse::<i32>()
        .map_err(|_| validation_error(format!("year must be an integer, got '{}'", raw)))
}

/// Rechazar identificadores de pieza no positivos o repetidos en un mismo envío
pub fn ensure_valid_part_ids<I>(ids: I) -> AppResult<()>
where
    I: IntoIterator<Item = i32>,
{
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for id in ids {
        if id <= 0 {
            return Err(validation_error(format!("part id must be positive, got {}", id)));
        }
        if !seen.insert(id) {
            repeated.push(id);
        }
    }
    if repeated.is_empty() {
        return Ok(());
    }

    repeated.sort_unstable();
    repeated.dedup();
    Err(validation_error(format!(
        "part ids must be unique, repeated: {:?}",
        repeated
    )))
}
