//! DTOs de la API
//!
//! Esquemas explícitos de request/response por endpoint.

pub mod auth_dto;
pub mod catalog_dto;
pub mod flags;
pub mod inventory_dto;
pub mod vehicle_dto;
