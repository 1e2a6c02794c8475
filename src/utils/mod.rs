//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y extractores comunes.

pub mod errors;
pub mod extractors;
pub mod validation;
