//! Módulo de base de datos
//!
//! Maneja la conexión, el schema y la carga del catálogo en PostgreSQL.

pub mod connection;
pub mod schema;
pub mod seed;

pub use connection::DatabaseConnection;
