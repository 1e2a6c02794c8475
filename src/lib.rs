//! Junkyard inventory
//!
//! Inventario de un desguace: catálogo de vehículos y piezas, vehículos
//! agregados con la disponibilidad de cada pieza, y el cliente de
//! formularios que consume la API.

pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
