//! Controladores
//!
//! Lógica de cada operación: validan lo que el extractor no cubre,
//! delegan en el store y arman la respuesta.

pub mod auth_controller;
pub mod catalog_controller;
pub mod inventory_controller;
pub mod vehicle_controller;
